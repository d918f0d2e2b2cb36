//! Reveal-window pagination for the list view.
//!
//! The list does not page in the offset/limit sense: a reveal count grows
//! by one page size per "load more" step and is always applied from the top
//! of the current selection. Narrowing a filter keeps the requested count;
//! the window simply covers more or less of the new selection.

/// Clamp bounds for a client-requested reveal count.
const MIN_REVEAL: usize = 1;
const MAX_REVEAL: usize = 200;

/// One reveal window over a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Size of the whole selection, not just the revealed window.
    pub total: usize,
    /// Reveal count to request for the next "load more" step; `None` once
    /// everything is visible.
    pub next_limit: Option<usize>,
}

/// Default and clamp a requested reveal count. `None` falls back to
/// `page_size`; explicit values are clamped to `1..=200`.
#[must_use]
pub fn normalize_reveal(requested: Option<usize>, page_size: usize) -> usize {
    requested.unwrap_or(page_size).clamp(MIN_REVEAL, MAX_REVEAL)
}

/// Take the first `revealed` items of the selection. While hidden items
/// remain, `next_limit` is `revealed + page_size`.
#[must_use]
pub fn reveal<T>(selection: Vec<T>, revealed: usize, page_size: usize) -> Page<T> {
    let total = selection.len();
    let mut items = selection;
    items.truncate(revealed);
    let next_limit = (total > revealed).then_some(revealed + page_size);
    Page {
        items,
        total,
        next_limit,
    }
}
