//! Fixed-size paging over an in-memory list

use std::ops::Range;

/// `ceil(len / page_size)`, 0 for an empty list
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of page `index`; empty when the page is out of range
pub fn page_bounds(index: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = index.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 0-based; not clamped, callers keep it below `page_count`
    pub index: usize,
    pub page_size: usize,
    pub page_count: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            index: 0,
            page_size,
            page_count: 0,
        }
    }

    pub fn bounds(&self, len: usize) -> Range<usize> {
        page_bounds(self.index, self.page_size, len)
    }
}
