use super::api;
use super::store::{CatalogStore, ListView};
use super::suggestions::{SuggestionEngine, SuggestionRequest, SuggestionView};
use crate::shared::config::CatalogConfig;
use contracts::domain::a001_catalog_entry::CatalogEntry;
use contracts::domain::a002_species_detail::DetailRecord;
use contracts::projections::p900_alphabet_histogram::LetterCount;
use contracts::shared::error::FetchError;
use contracts::shared::pagination::PageState;
use contracts::shared::request_seq::RequestTicket;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// ViewModel of the catalog browser.
///
/// Created once per session in `App` and handed to components through
/// context. Holds the store and the suggestion engine in signals; every
/// action that talks to the API is spawned on the local executor.
#[derive(Clone, Copy)]
pub struct CatalogViewModel {
    store: RwSignal<CatalogStore>,
    suggestions: RwSignal<SuggestionEngine>,
    config: StoredValue<CatalogConfig>,
}

impl CatalogViewModel {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            store: RwSignal::new(CatalogStore::new(config.catalog.page_size)),
            suggestions: RwSignal::new(SuggestionEngine::new(
                config.search.suggestion_limit,
                config.search.no_match_min_len,
            )),
            config: StoredValue::new(config),
        }
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&CatalogConfig) -> R) -> R {
        self.config.with_value(f)
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Fetch the catalog snapshot. No-op once loaded or while loading.
    pub fn load_catalog(&self) {
        let Some(ticket) = self.store.try_update(|s| s.begin_load()).flatten() else {
            log::debug!("Catalog already loaded or loading");
            return;
        };

        let config = self.config.get_value();
        let store = self.store;
        let suggestions = self.suggestions;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_catalog(&config).await;
            match &result {
                Ok(entries) => log::info!("Catalog loaded: {} entries", entries.len()),
                Err(e) => log::warn!("Catalog load failed: {}", e),
            }
            settle_load(store, suggestions, ticket, result);
        });
    }

    /// The search box changed: preview the page count and restart the
    /// suggestion quiet period.
    pub fn change_term(&self, term: String) {
        self.store.update(|s| s.set_filter_term(term.clone()));

        let Some(ticket) = self.suggestions.try_update(|e| e.on_term_changed(term)) else {
            return;
        };
        let delay = self.with_config(|c| c.search.debounce_ms);
        let store = self.store;
        let suggestions = self.suggestions;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let Some(request) = suggestions.try_update(|e| e.fire(ticket)).flatten() else {
                return;
            };
            log::debug!("Looking up suggestions for {:?}", request.term);
            resolve_suggestions(store, suggestions, request);
        });
    }

    pub fn submit_filter(&self) {
        self.store.update(|s| s.submit_filter());
        self.hide_suggestions();
    }

    pub fn change_page(&self, index: usize) {
        self.store.update(|s| s.set_page(index));
    }

    pub fn select_entry(&self, name: String) {
        let ticket = self.store.try_update(|s| s.begin_detail(&name));
        let Some(ticket) = ticket else {
            return;
        };

        let config = self.config.get_value();
        let store = self.store;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_detail(&config, &name).await;
            if let Err(e) = &result {
                log::warn!("Detail fetch for {} failed: {}", name, e);
            }
            let applied = store
                .try_update(|s| s.finish_detail(ticket, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarded stale detail response for {}", name);
            }
        });
    }

    /// Commit a suggestion as the term and filter the cached snapshot with it
    pub fn select_suggestion(&self, name: String) {
        self.suggestions.update(|e| e.choose());
        self.store.update(|s| s.commit_term(name));
    }

    pub fn hide_suggestions(&self) {
        if self.suggestions.with_untracked(|e| e.is_visible()) {
            self.suggestions.update(|e| e.hide());
        }
    }

    pub fn focus_search(&self) {
        let term = self.store.with_untracked(|s| s.pending_term().to_string());
        self.suggestions.update(|e| e.reveal_on_focus(&term));
    }

    // ------------------------------------------------------------------
    // Reactive reads
    // ------------------------------------------------------------------

    pub fn term(&self) -> String {
        self.store.with(|s| s.pending_term().to_string())
    }

    pub fn list_view(&self) -> ListView {
        self.store.with(|s| s.list_view())
    }

    pub fn page_entries(&self) -> Vec<CatalogEntry> {
        self.store.with(|s| s.current_page_entries())
    }

    pub fn page(&self) -> PageState {
        self.store.with(|s| s.page())
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.store.with(|s| s.selected() == Some(name))
    }

    pub fn detail(&self) -> Option<DetailRecord> {
        self.store.with(|s| s.detail().cloned())
    }

    pub fn detail_loading(&self) -> bool {
        self.store.with(|s| s.detail_loading())
    }

    pub fn detail_error(&self) -> Option<String> {
        self.store.with(|s| s.detail_error().map(|e| e.to_string()))
    }

    pub fn alphabet_rows(&self) -> Vec<LetterCount> {
        self.store.with(|s| s.histogram().rows().collect())
    }

    pub fn suggestion_view(&self) -> SuggestionView {
        let term = self.term();
        self.suggestions.with(|e| e.view(&term))
    }

    pub fn suggestions_loading(&self) -> bool {
        self.suggestions.with(|e| e.loading())
    }
}

/// Apply the catalog load result, then answer a lookup parked meanwhile
fn settle_load(
    store: RwSignal<CatalogStore>,
    suggestions: RwSignal<SuggestionEngine>,
    ticket: RequestTicket,
    result: Result<Vec<CatalogEntry>, FetchError>,
) {
    let applied = store
        .try_update(|s| s.finish_load(ticket, result))
        .unwrap_or(false);
    if !applied {
        log::debug!("Discarded stale catalog response");
        return;
    }
    if let Some(request) = suggestions.try_update(|e| e.take_parked()).flatten() {
        resolve_suggestions(store, suggestions, request);
    }
}

/// Answer a suggestion lookup from the cached snapshot, or park it until
/// the catalog load settles.
fn resolve_suggestions(
    store: RwSignal<CatalogStore>,
    suggestions: RwSignal<SuggestionEngine>,
    request: SuggestionRequest,
) {
    store.with_untracked(|s| {
        if s.is_loaded() {
            suggestions.update(|e| {
                e.finish(&request, Ok(s.snapshot()));
            });
        } else if let Some(err) = s.list_error().filter(|_| !s.list_loading()) {
            log::warn!("Suggestions unavailable: {}", err);
            suggestions.update(|e| {
                e.finish(&request, Err(err));
            });
        } else {
            suggestions.update(|e| e.park(request));
        }
    });
}
