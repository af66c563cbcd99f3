use crate::domain::a001_catalog::store::ListView;
use crate::domain::a001_catalog::CatalogViewModel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::media::{speak, swap_to_fallback};
use contracts::domain::a001_catalog_entry::CatalogEntry;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CatalogList() -> impl IntoView {
    let vm = use_context::<CatalogViewModel>().expect("CatalogViewModel not found in context");

    // Only rebuild the area when its state kind changes, not on every page turn.
    let list_view = Memo::new(move |_| vm.list_view());

    view! {
        <div class="catalog-list">
            <h2 class="catalog-list__title">"Species"</h2>
            {move || match list_view.get() {
                ListView::Loading => view! {
                    <div class="catalog-list__loading">
                        <Spinner size=SpinnerSize::Small />
                        <span>"Loading species..."</span>
                    </div>
                }
                .into_any(),
                ListView::Failed(message) => view! {
                    <NotFound
                        title="Catalog unavailable".to_string()
                        message=format!("The species list could not be loaded. {}", message)
                    />
                }
                .into_any(),
                ListView::NoMatches => view! {
                    <NotFound
                        title="No species found".to_string()
                        message="Nothing in the catalog matches this search.".to_string()
                    />
                }
                .into_any(),
                ListView::Ready => view! { <CatalogGrid /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn NotFound(title: String, message: String) -> impl IntoView {
    let vm = use_context::<CatalogViewModel>().expect("CatalogViewModel not found in context");
    let image = vm.with_config(|c| c.media.fallback_image.clone());

    view! {
        <div class="catalog-not-found">
            <img class="catalog-not-found__image" src=image alt="Pokeball" />
            <p class="catalog-not-found__title">{title}</p>
            <p class="catalog-not-found__message">{message}</p>
        </div>
    }
}

#[component]
fn CatalogGrid() -> impl IntoView {
    let vm = use_context::<CatalogViewModel>().expect("CatalogViewModel not found in context");

    let on_page_change = Callback::new(move |index: usize| {
        vm.change_page(index);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <div class="catalog-grid">
            <For
                each=move || vm.page_entries()
                key=|entry| entry.name.clone()
                children=move |entry| view! { <EntryCard entry=entry /> }
            />
        </div>
        <PaginationControls
            current_page=Signal::derive(move || vm.page().index)
            total_pages=Signal::derive(move || vm.page().page_count)
            on_page_change=on_page_change
        />
    }
}

#[component]
fn EntryCard(entry: CatalogEntry) -> impl IntoView {
    let vm = use_context::<CatalogViewModel>().expect("CatalogViewModel not found in context");
    let img_ref = NodeRef::<leptos::html::Img>::new();

    let (sprite, fallback, lang) = vm.with_config(|c| {
        let fallback = c.media.fallback_image.clone();
        let sprite = entry
            .species_id()
            .map(|id| c.sprite_url(id.value()))
            .unwrap_or_else(|| fallback.clone());
        (sprite, fallback, c.media.speech_lang.clone())
    });
    let display_id = format!("#{}", entry.display_id());
    let name = entry.name;
    let name_for_selected = name.clone();
    let name_for_click = name.clone();

    view! {
        <div
            class="catalog-card"
            class:catalog-card--selected=move || vm.is_selected(&name_for_selected)
            on:click=move |_| {
                vm.select_entry(name_for_click.clone());
                speak(&name_for_click, &lang);
            }
        >
            <img
                class="catalog-card__sprite"
                node_ref=img_ref
                src=sprite
                alt=name.clone()
                on:error=move |_| {
                    if let Some(img) = img_ref.get_untracked() {
                        swap_to_fallback(&img, &fallback);
                    }
                }
            />
            <div class="catalog-card__text">
                <p class="catalog-card__name">{name}</p>
                <p class="catalog-card__id">{display_id}</p>
            </div>
        </div>
    }
}
