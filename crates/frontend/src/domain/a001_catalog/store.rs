//! Catalog state: snapshot, two-phase filter, paging and the detail slot.
//!
//! The store is a plain state machine. Async fetches are driven by
//! [`super::view_model::CatalogViewModel`], which takes a [`RequestTicket`]
//! when it issues a request and hands it back with the result. Results whose
//! ticket is no longer the latest for their slot are dropped.

use contracts::domain::a001_catalog_entry::CatalogEntry;
use contracts::domain::a002_species_detail::DetailRecord;
use contracts::projections::p900_alphabet_histogram::AlphabetHistogram;
use contracts::shared::error::FetchError;
use contracts::shared::pagination::{page_count, PageState};
use contracts::shared::request_seq::{RequestSeq, RequestTicket};
use contracts::shared::search::{count_matches, filter_indices, is_blank};

/// What the list area should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    /// The catalog could not be fetched
    Failed(String),
    /// The catalog is loaded but the applied search matched nothing
    NoMatches,
    Ready,
}

#[derive(Debug, Clone)]
pub struct CatalogStore {
    snapshot: Vec<CatalogEntry>,
    loaded: bool,
    histogram: AlphabetHistogram,

    /// Term as typed; drives the page count preview
    pending_term: String,
    /// Term last submitted; drives the filtered view
    applied_term: String,
    /// Positions in `snapshot`, in snapshot order
    filtered: Vec<usize>,
    page: PageState,

    detail: Option<DetailRecord>,
    selected: Option<String>,

    list_loading: bool,
    detail_loading: bool,
    list_error: Option<FetchError>,
    detail_error: Option<FetchError>,
    list_seq: RequestSeq,
    detail_seq: RequestSeq,
}

impl CatalogStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            snapshot: Vec::new(),
            loaded: false,
            histogram: AlphabetHistogram::default(),
            pending_term: String::new(),
            applied_term: String::new(),
            filtered: Vec::new(),
            page: PageState::new(page_size.max(1)),
            detail: None,
            selected: None,
            list_loading: false,
            detail_loading: false,
            list_error: None,
            detail_error: None,
            list_seq: RequestSeq::new(),
            detail_seq: RequestSeq::new(),
        }
    }

    // ------------------------------------------------------------------
    // Catalog loading
    // ------------------------------------------------------------------

    /// Start the session's catalog fetch.
    ///
    /// Returns `None` when the snapshot is already loaded or a load is in
    /// flight: the snapshot is fetched once and reused for the session.
    pub fn begin_load(&mut self) -> Option<RequestTicket> {
        if self.loaded || self.list_loading {
            return None;
        }
        self.list_loading = true;
        Some(self.list_seq.issue())
    }

    /// Apply the catalog fetch result. Returns `false` for a stale ticket.
    ///
    /// A failure records the error and keeps any previous state.
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<CatalogEntry>, FetchError>,
    ) -> bool {
        if !self.list_seq.is_latest(ticket) {
            return false;
        }
        self.list_loading = false;

        match result {
            Ok(entries) => {
                self.histogram = AlphabetHistogram::from_entries(&entries);
                self.snapshot = entries;
                self.loaded = true;
                self.list_error = None;
                self.filtered = filter_indices(&self.snapshot, &self.applied_term);
                self.refresh_page_count();
            }
            Err(e) => self.list_error = Some(e),
        }
        true
    }

    // ------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------

    /// Update the typed term.
    ///
    /// Only the page count follows the new term. The visible list keeps
    /// showing the last submitted term until [`Self::submit_filter`].
    pub fn set_filter_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.pending_term {
            return;
        }
        self.pending_term = term;
        self.refresh_page_count();
    }

    /// Apply the typed term to the visible list
    pub fn submit_filter(&mut self) {
        self.applied_term = self.pending_term.clone();
        self.filtered = filter_indices(&self.snapshot, &self.applied_term);
    }

    /// Set and apply a term in one step (a chosen suggestion)
    pub fn commit_term(&mut self, term: impl Into<String>) {
        self.set_filter_term(term);
        self.submit_filter();
    }

    fn refresh_page_count(&mut self) {
        if is_blank(&self.pending_term) {
            self.page.page_count = page_count(self.snapshot.len(), self.page.page_size);
        } else {
            let matches = count_matches(&self.snapshot, &self.pending_term);
            self.page.page_count = page_count(matches, self.page.page_size);
            self.page.index = 0;
        }
    }

    // ------------------------------------------------------------------
    // Paging
    // ------------------------------------------------------------------

    /// Not clamped: an index past the last page yields an empty page.
    pub fn set_page(&mut self, index: usize) {
        self.page.index = index;
    }

    pub fn current_page_entries(&self) -> Vec<CatalogEntry> {
        let range = self.page.bounds(self.filtered.len());
        self.filtered[range]
            .iter()
            .map(|&i| self.snapshot[i].clone())
            .collect()
    }

    // ------------------------------------------------------------------
    // Detail
    // ------------------------------------------------------------------

    pub fn begin_detail(&mut self, name: &str) -> RequestTicket {
        self.selected = Some(name.to_string());
        self.detail_loading = true;
        self.detail_seq.issue()
    }

    /// Apply a detail fetch result. Returns `false` for a stale ticket.
    ///
    /// On failure the previous record is dropped so the panel never shows
    /// one species under another's selection.
    pub fn finish_detail(
        &mut self,
        ticket: RequestTicket,
        result: Result<DetailRecord, FetchError>,
    ) -> bool {
        if !self.detail_seq.is_latest(ticket) {
            return false;
        }
        self.detail_loading = false;

        match result {
            Ok(record) => {
                self.detail = Some(record);
                self.detail_error = None;
            }
            Err(e) => {
                self.detail = None;
                self.detail_error = Some(e);
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> &[CatalogEntry] {
        &self.snapshot
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn histogram(&self) -> &AlphabetHistogram {
        &self.histogram
    }

    pub fn pending_term(&self) -> &str {
        &self.pending_term
    }

    pub fn applied_term(&self) -> &str {
        &self.applied_term
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn detail(&self) -> Option<&DetailRecord> {
        self.detail.as_ref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn list_loading(&self) -> bool {
        self.list_loading
    }

    pub fn detail_loading(&self) -> bool {
        self.detail_loading
    }

    pub fn list_error(&self) -> Option<&FetchError> {
        self.list_error.as_ref()
    }

    pub fn detail_error(&self) -> Option<&FetchError> {
        self.detail_error.as_ref()
    }

    /// The list failure if any, otherwise the detail failure
    pub fn error(&self) -> Option<&FetchError> {
        self.list_error.as_ref().or(self.detail_error.as_ref())
    }

    pub fn list_view(&self) -> ListView {
        if self.list_loading || (!self.loaded && self.list_error.is_none()) {
            return ListView::Loading;
        }
        if let Some(e) = &self.list_error {
            return ListView::Failed(e.to_string());
        }
        if self.filtered.is_empty() {
            return ListView::NoMatches;
        }
        ListView::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_catalog_entry::SpeciesId;

    fn entry(name: &str, id: u32) -> CatalogEntry {
        CatalogEntry::new(name, format!("https://pokeapi.co/api/v2/pokemon/{}/", id))
    }

    fn starters() -> Vec<CatalogEntry> {
        vec![entry("bulbasaur", 1), entry("ivysaur", 2), entry("venusaur", 3)]
    }

    fn numbered(count: u32) -> Vec<CatalogEntry> {
        (1..=count).map(|i| entry(&format!("mon{}", i), i)).collect()
    }

    fn loaded(entries: Vec<CatalogEntry>) -> CatalogStore {
        let mut store = CatalogStore::new(20);
        let ticket = store.begin_load().unwrap();
        assert!(store.finish_load(ticket, Ok(entries)));
        store
    }

    fn record(name: &str, id: u32) -> DetailRecord {
        DetailRecord {
            id: SpeciesId(id),
            name: name.to_string(),
            image: None,
            height: 4,
            weight: 60,
            categories: vec!["electric".to_string()],
            traits: Vec::new(),
            statistics: Vec::new(),
        }
    }

    fn names(entries: &[CatalogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_load_populates_view_and_histogram() {
        let store = loaded(starters());
        assert!(store.is_loaded());
        assert!(!store.list_loading());
        assert_eq!(store.filtered_len(), 3);
        assert_eq!(store.page().page_count, 1);
        assert_eq!(store.page().index, 0);
        assert_eq!(store.histogram().count('B'), 1);
        assert_eq!(store.histogram().count('V'), 1);
        assert_eq!(store.list_view(), ListView::Ready);
    }

    #[test]
    fn test_loading_flag_gates_list() {
        let mut store = CatalogStore::new(20);
        assert_eq!(store.list_view(), ListView::Loading);
        let _ticket = store.begin_load().unwrap();
        assert!(store.list_loading());
        assert_eq!(store.list_view(), ListView::Loading);
    }

    #[test]
    fn test_catalog_is_fetched_once() {
        let mut store = CatalogStore::new(20);
        let ticket = store.begin_load().unwrap();
        assert!(store.begin_load().is_none(), "second load while in flight");
        store.finish_load(ticket, Ok(starters()));
        assert!(store.begin_load().is_none(), "second load after success");
    }

    #[test]
    fn test_load_failure_keeps_state() {
        let mut store = CatalogStore::new(20);
        let ticket = store.begin_load().unwrap();
        assert!(store.finish_load(ticket, Err(FetchError::status(500))));
        assert!(!store.list_loading());
        assert!(!store.is_loaded());
        assert!(store.snapshot().is_empty());
        assert_eq!(
            store.list_view(),
            ListView::Failed("HTTP error: 500".to_string())
        );
        assert_eq!(store.error().map(|e| e.message()), Some("HTTP error: 500"));
    }

    #[test]
    fn test_failure_and_no_matches_are_distinct() {
        let mut store = loaded(starters());
        store.set_filter_term("pikachu");
        store.submit_filter();
        assert_eq!(store.list_view(), ListView::NoMatches);
        assert!(store.error().is_none());
    }

    // Scenario A
    #[test]
    fn test_substring_filter_keeps_original_order() {
        let mut store = loaded(starters());
        store.set_filter_term("saur");
        store.submit_filter();
        assert_eq!(store.page().page_count, 1);
        assert_eq!(
            names(&store.current_page_entries()),
            vec!["bulbasaur", "ivysaur", "venusaur"]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut store = loaded(starters());
        store.set_filter_term("IVY");
        store.submit_filter();
        assert_eq!(names(&store.current_page_entries()), vec!["ivysaur"]);
    }

    #[test]
    fn test_term_change_previews_page_count_only() {
        let mut store = loaded(numbered(45));
        assert_eq!(store.page().page_count, 3);

        // "mon1" matches mon1, mon10..mon19 = 11 entries
        store.set_filter_term("mon1");
        assert_eq!(store.page().page_count, 1);
        assert_eq!(store.filtered_len(), 45, "view waits for submit");
        assert_eq!(store.applied_term(), "");

        store.submit_filter();
        assert_eq!(store.filtered_len(), 11);
        assert_eq!(store.applied_term(), "mon1");
    }

    #[test]
    fn test_non_blank_term_resets_page_index() {
        let mut store = loaded(numbered(45));
        store.set_page(2);
        store.set_filter_term("mon");
        assert_eq!(store.page().index, 0);
    }

    #[test]
    fn test_blank_term_keeps_page_index() {
        let mut store = loaded(numbered(45));
        store.set_filter_term("mon");
        store.set_page(2);
        store.set_filter_term("");
        assert_eq!(store.page().index, 2);
        assert_eq!(store.page().page_count, 3);
    }

    // Scenario B
    #[test]
    fn test_clearing_term_needs_submit() {
        let mut store = loaded(starters());
        store.set_filter_term("ivy");
        store.submit_filter();
        assert_eq!(store.filtered_len(), 1);

        store.set_filter_term("");
        assert_eq!(store.filtered_len(), 1);

        store.submit_filter();
        assert_eq!(store.filtered_len(), 3);
    }

    #[test]
    fn test_submit_is_idempotent() {
        let mut store = loaded(numbered(45));
        store.set_filter_term("mon2");
        store.submit_filter();
        let first = store.current_page_entries();
        store.submit_filter();
        assert_eq!(store.current_page_entries(), first);
        assert_eq!(store.filtered_len(), 11);
    }

    #[test]
    fn test_commit_term_applies_immediately() {
        let mut store = loaded(starters());
        store.commit_term("venusaur");
        assert_eq!(store.pending_term(), "venusaur");
        assert_eq!(names(&store.current_page_entries()), vec!["venusaur"]);
    }

    #[test]
    fn test_term_typed_during_load_drives_page_count() {
        let mut store = CatalogStore::new(20);
        let ticket = store.begin_load().unwrap();
        store.set_filter_term("mon4");
        store.finish_load(ticket, Ok(numbered(45)));
        // mon4, mon40..mon45
        assert_eq!(store.page().page_count, 1);
        assert_eq!(store.filtered_len(), 45);
    }

    // Scenario C
    #[test]
    fn test_last_page_is_short() {
        let mut store = loaded(numbered(45));
        assert_eq!(store.page().page_count, 3);
        store.set_page(2);
        let page = store.current_page_entries();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].name, "mon41");
    }

    #[test]
    fn test_page_sizes_across_lengths() {
        for len in [1u32, 19, 20, 21, 40, 59, 60, 61] {
            let mut store = loaded(numbered(len));
            let count = store.page().page_count;
            assert_eq!(count, (len as usize).div_ceil(20));
            for index in 0..count {
                store.set_page(index);
                let size = store.current_page_entries().len();
                if index + 1 == count {
                    assert_eq!(size, len as usize - (count - 1) * 20);
                } else {
                    assert_eq!(size, 20);
                }
            }
        }
    }

    #[test]
    fn test_empty_catalog_has_no_pages() {
        let store = loaded(Vec::new());
        assert_eq!(store.page().page_count, 0);
        assert!(store.current_page_entries().is_empty());
        assert_eq!(store.list_view(), ListView::NoMatches);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let mut store = loaded(numbered(45));
        store.set_page(3);
        assert!(store.current_page_entries().is_empty());
        store.set_page(usize::MAX);
        assert!(store.current_page_entries().is_empty());
    }

    #[test]
    fn test_snapshot_unchanged_by_other_operations() {
        let mut store = loaded(starters());
        let before = store.snapshot().to_vec();

        store.set_filter_term("ivy");
        store.submit_filter();
        store.set_page(4);
        let ticket = store.begin_detail("ivysaur");
        store.finish_detail(ticket, Ok(record("ivysaur", 2)));
        store.commit_term("");

        assert_eq!(store.snapshot(), before.as_slice());
    }

    #[test]
    fn test_histogram_ignores_filter() {
        let mut store = loaded(starters());
        store.commit_term("ivy");
        assert_eq!(store.histogram().count('B'), 1);
        assert_eq!(store.histogram().total(), 3);
    }

    #[test]
    fn test_detail_selection() {
        let mut store = loaded(starters());
        let ticket = store.begin_detail("bulbasaur");
        assert!(store.detail_loading());
        assert_eq!(store.selected(), Some("bulbasaur"));

        assert!(store.finish_detail(ticket, Ok(record("bulbasaur", 1))));
        assert!(!store.detail_loading());
        assert_eq!(store.detail().map(|d| d.name.as_str()), Some("bulbasaur"));
    }

    // Scenario E: "pikachu" settles after "raichu"; the older response is dropped.
    #[test]
    fn test_late_detail_response_is_discarded() {
        let mut store = loaded(starters());
        let pikachu = store.begin_detail("pikachu");
        let raichu = store.begin_detail("raichu");

        assert!(store.finish_detail(raichu, Ok(record("raichu", 26))));
        assert!(!store.finish_detail(pikachu, Ok(record("pikachu", 25))));

        assert_eq!(store.detail().map(|d| d.name.as_str()), Some("raichu"));
        assert_eq!(store.selected(), Some("raichu"));
    }

    #[test]
    fn test_older_detail_keeps_loading_until_latest_settles() {
        let mut store = loaded(starters());
        let pikachu = store.begin_detail("pikachu");
        let raichu = store.begin_detail("raichu");

        assert!(!store.finish_detail(pikachu, Ok(record("pikachu", 25))));
        assert!(store.detail_loading());
        assert!(store.detail().is_none());

        assert!(store.finish_detail(raichu, Ok(record("raichu", 26))));
        assert!(!store.detail_loading());
    }

    #[test]
    fn test_detail_failure_is_visible() {
        let mut store = loaded(starters());
        let ticket = store.begin_detail("bulbasaur");
        store.finish_detail(ticket, Ok(record("bulbasaur", 1)));

        let ticket = store.begin_detail("missingno");
        assert!(store.finish_detail(ticket, Err(FetchError::status(404))));
        assert!(store.detail().is_none());
        assert_eq!(
            store.detail_error().map(|e| e.message()),
            Some("HTTP error: 404")
        );
        assert_eq!(store.list_view(), ListView::Ready);

        let ticket = store.begin_detail("ivysaur");
        store.finish_detail(ticket, Ok(record("ivysaur", 2)));
        assert!(store.detail_error().is_none());
    }

    #[test]
    fn test_list_error_reported_before_detail_error() {
        let mut store = CatalogStore::new(20);
        let load = store.begin_load().unwrap();
        let detail = store.begin_detail("pikachu");
        store.finish_detail(detail, Err(FetchError::transport("offline")));
        store.finish_load(load, Err(FetchError::status(503)));
        assert_eq!(store.error().map(|e| e.message()), Some("HTTP error: 503"));
        assert_eq!(
            store.detail_error().map(|e| e.message()),
            Some("Request failed: offline")
        );
    }
}
