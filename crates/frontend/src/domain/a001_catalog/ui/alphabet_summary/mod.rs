use crate::domain::a001_catalog::CatalogViewModel;
use leptos::prelude::*;

/// Number of species per initial letter, one column per letter A-Z
#[component]
pub fn AlphabetSummary() -> impl IntoView {
    let vm = use_context::<CatalogViewModel>().expect("CatalogViewModel not found in context");
    let rows = Memo::new(move |_| vm.alphabet_rows());

    view! {
        <div class="alphabet-summary">
            <h2 class="alphabet-summary__title">"Species by initial letter"</h2>
            <div class="alphabet-summary__scroll">
                <table class="alphabet-summary__table">
                    <thead>
                        <tr>
                            {move || {
                                rows.get()
                                    .into_iter()
                                    .map(|row| view! { <th>{row.letter.to_string()}</th> })
                                    .collect_view()
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        <tr>
                            {move || {
                                rows.get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, row)| view! {
                                        <td
                                            class="alphabet-summary__cell"
                                            class:alphabet-summary__cell--odd={index % 2 == 1}
                                        >
                                            {row.count}
                                        </td>
                                    })
                                    .collect_view()
                            }}
                        </tr>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
