use super::alphabet_summary::AlphabetSummary;
use super::details::DetailPanel;
use super::list::CatalogList;
use super::search_bar::SearchBar;
use leptos::prelude::*;
use thaw::*;

/// Catalog browser layout: search on top, list and detail side by side,
/// letter summary below.
#[component]
pub fn CatalogPage() -> impl IntoView {
    view! {
        <div class="catalog-page">
            <h1 class="catalog-page__title">"Pokédex"</h1>
            <div class="catalog-page__search">
                <SearchBar />
            </div>
            <div class="catalog-page__body">
                <div class="catalog-page__list">
                    <Card>
                        <CatalogList />
                    </Card>
                </div>
                <div class="catalog-page__detail">
                    <Card>
                        <DetailPanel />
                    </Card>
                </div>
            </div>
            <div class="catalog-page__summary">
                <Card>
                    <AlphabetSummary />
                </Card>
            </div>
        </div>
    }
}
