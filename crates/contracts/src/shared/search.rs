//! Case-insensitive substring search over in-memory lists

/// Types that can be matched against a free-text filter
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Empty or whitespace-only terms do not filter
pub fn is_blank(term: &str) -> bool {
    term.trim().is_empty()
}

/// Positions of the items matching `term`, in list order.
/// A blank term selects every item.
pub fn filter_indices<T: Searchable>(items: &[T], term: &str) -> Vec<usize> {
    if is_blank(term) {
        return (0..items.len()).collect();
    }
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.matches_filter(term))
        .map(|(i, _)| i)
        .collect()
}

/// Number of items matching `term`; blank terms count everything
pub fn count_matches<T: Searchable>(items: &[T], term: &str) -> usize {
    if is_blank(term) {
        return items.len();
    }
    items.iter().filter(|item| item.matches_filter(term)).count()
}
