use crate::domain::a001_catalog::suggestions::SuggestionView;
use crate::domain::a001_catalog::CatalogViewModel;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn SearchBar() -> impl IntoView {
    let vm = use_context::<CatalogViewModel>().expect("CatalogViewModel not found in context");
    let container_ref = NodeRef::<leptos::html::Div>::new();

    // Close the dropdown on any press outside the search area.
    let handle = window_event_listener(leptos::ev::mousedown, move |ev: leptos::ev::MouseEvent| {
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let inside = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map(|node| container.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            vm.hide_suggestions();
        }
    });
    on_cleanup(move || handle.remove());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_filter();
    };

    view! {
        <div class="search-bar" node_ref=container_ref>
            <form class="search-bar__form" on:submit=on_submit>
                <span class="search-bar__icon">{icon("search")}</span>
                <input
                    type="text"
                    class="search-bar__input"
                    placeholder="Search species..."
                    prop:value=move || vm.term()
                    on:input=move |ev| vm.change_term(event_target_value(&ev))
                    on:focus=move |_| vm.focus_search()
                />
                {move || {
                    if vm.suggestions_loading() {
                        view! {
                            <span class="search-bar__status">
                                <Spinner size=SpinnerSize::Tiny />
                            </span>
                        }
                        .into_any()
                    } else if !vm.term().is_empty() {
                        view! {
                            <button
                                type="button"
                                class="search-bar__clear"
                                title="Clear"
                                on:click=move |_| vm.change_term(String::new())
                            >
                                {icon("x")}
                            </button>
                        }
                        .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </form>
            {move || match vm.suggestion_view() {
                SuggestionView::Hidden => view! { <></> }.into_any(),
                SuggestionView::Matches(entries) => {
                    let term = vm.term();
                    view! {
                        <ul class="search-bar__suggestions">
                            {entries
                                .into_iter()
                                .map(|entry| {
                                    let label = highlight_matches(&entry.name, &term);
                                    let name = entry.name;
                                    view! {
                                        <li
                                            class="search-bar__suggestion"
                                            on:click=move |_| vm.select_suggestion(name.clone())
                                        >
                                            {label}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
                SuggestionView::NoMatches => view! {
                    <div class="search-bar__no-matches">"No matches found"</div>
                }
                .into_any(),
            }}
        </div>
    }
}
