use crate::shared::icons::icon;
use leptos::prelude::*;

/// One slot of the page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// 0-based page index
    Page(usize),
    /// Collapsed run of pages ("…")
    Break,
}

/// Layout of the page strip.
///
/// Always shows `margin` pages at each end and a window around `current`
/// (`range / 2` before, the rest after). Gaps of a single page show the
/// page itself instead of a break.
pub fn page_items(current: usize, total: usize, margin: usize, range: usize) -> Vec<PageItem> {
    let left = range / 2;
    let right = range - left;
    let window_start = current.saturating_sub(left);
    let window_end = current.saturating_add(right);
    let visible = |i: usize| {
        i < margin || i + margin >= total || (window_start..=window_end).contains(&i)
    };

    let mut items = Vec::new();
    let mut i = 0;
    while i < total {
        if visible(i) {
            items.push(PageItem::Page(i));
            i += 1;
            continue;
        }
        let gap_start = i;
        while i < total && !visible(i) {
            i += 1;
        }
        if i - gap_start == 1 {
            items.push(PageItem::Page(gap_start));
        } else {
            items.push(PageItem::Break);
        }
    }
    items
}

/// PaginationControls component - previous/next plus a numbered page strip
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Pages always shown at each end
    #[prop(optional)]
    margin_pages: Option<usize>,

    /// Pages shown around the current one
    #[prop(optional)]
    page_range: Option<usize>,
) -> impl IntoView {
    let margin = margin_pages.unwrap_or(2);
    let range = page_range.unwrap_or(2);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_items(current, total_pages.get(), margin, range)
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(index) => view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active={index == current}
                                on:click=move |_| on_page_change.run(index)
                            >
                                {(index + 1).to_string()}
                            </button>
                        }
                        .into_any(),
                        PageItem::Break => view! {
                            <span class="pagination-break">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
