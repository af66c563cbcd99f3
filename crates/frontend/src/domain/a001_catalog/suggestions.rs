//! Search suggestions: debounced, bounded preview of matching names.
//!
//! Matches are computed from the catalog snapshot held by the store, so a
//! suggestion never costs a second network round-trip. The view model parks
//! a request when the snapshot has not arrived yet and resolves it when the
//! catalog load settles.

use contracts::domain::a001_catalog_entry::CatalogEntry;
use contracts::shared::error::FetchError;
use contracts::shared::request_seq::{RequestSeq, RequestTicket};

// ============================================================================
// Debounce
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Restartable quiet-period timer.
///
/// The caller sleeps for the quiet period after [`Debouncer::schedule`] and
/// then calls [`Debouncer::fire`]; only the newest ticket fires.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn schedule(&mut self) -> DebounceTicket {
        self.generation += 1;
        self.pending = true;
        DebounceTicket(self.generation)
    }

    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if self.pending && ticket.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

// ============================================================================
// Suggestion engine
// ============================================================================

/// A fired suggestion lookup waiting for its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub ticket: RequestTicket,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionView {
    Hidden,
    Matches(Vec<CatalogEntry>),
    NoMatches,
}

/// First `limit` entries, in list order, whose name contains the lowercased term
pub fn compute_suggestions(entries: &[CatalogEntry], term: &str, limit: usize) -> Vec<CatalogEntry> {
    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|e| e.name.contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}

#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    limit: usize,
    no_match_min_len: usize,
    debouncer: Debouncer,
    seq: RequestSeq,
    pending_term: String,
    items: Vec<CatalogEntry>,
    visible: bool,
    loading: bool,
    parked: Option<SuggestionRequest>,
}

impl SuggestionEngine {
    pub fn new(limit: usize, no_match_min_len: usize) -> Self {
        Self {
            limit,
            no_match_min_len,
            debouncer: Debouncer::default(),
            seq: RequestSeq::new(),
            pending_term: String::new(),
            items: Vec::new(),
            visible: false,
            loading: false,
            parked: None,
        }
    }

    /// Record a new term and restart the quiet period
    pub fn on_term_changed(&mut self, term: impl Into<String>) -> DebounceTicket {
        self.pending_term = term.into();
        self.debouncer.schedule()
    }

    /// Called when the quiet period of `ticket` has elapsed.
    /// Returns the lookup to run, or `None` if a newer keystroke superseded it.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<SuggestionRequest> {
        if !self.debouncer.fire(ticket) {
            return None;
        }
        self.loading = true;
        Some(SuggestionRequest {
            ticket: self.seq.issue(),
            term: self.pending_term.clone(),
        })
    }

    /// Hold a request until the catalog snapshot is available
    pub fn park(&mut self, request: SuggestionRequest) {
        self.parked = Some(request);
    }

    pub fn take_parked(&mut self) -> Option<SuggestionRequest> {
        self.parked.take()
    }

    /// Apply the result of a lookup. Returns `false` when a newer lookup
    /// was issued meanwhile (the result is dropped).
    ///
    /// A failed lookup keeps the previous suggestions.
    pub fn finish(
        &mut self,
        request: &SuggestionRequest,
        result: Result<&[CatalogEntry], &FetchError>,
    ) -> bool {
        if !self.seq.is_latest(request.ticket) {
            return false;
        }
        self.loading = false;
        if let Ok(entries) = result {
            self.items = compute_suggestions(entries, &request.term, self.limit);
            self.visible = true;
        }
        true
    }

    /// Close the panel (click outside, submit)
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// A suggestion was picked: close the panel and drop any pending or
    /// running lookup so it cannot reopen it.
    pub fn choose(&mut self) {
        self.visible = false;
        self.loading = false;
        self.parked = None;
        self.debouncer.cancel();
        self.seq.invalidate();
    }

    /// Focusing the search box reopens the panel for a long enough term
    pub fn reveal_on_focus(&mut self, term: &str) {
        if term.trim().chars().count() >= self.no_match_min_len {
            self.visible = true;
        }
    }

    pub fn view(&self, term: &str) -> SuggestionView {
        if !self.visible {
            return SuggestionView::Hidden;
        }
        if !term.is_empty() && !self.items.is_empty() {
            return SuggestionView::Matches(self.items.clone());
        }
        if self.items.is_empty() && term.trim().chars().count() >= self.no_match_min_len {
            return SuggestionView::NoMatches;
        }
        SuggestionView::Hidden
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
