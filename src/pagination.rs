//! Fixed-size pagination over an already-fetched collection.

use crate::names;

/// Slice `items` down to the 1-based `page` of [`names::QUESTIONS_PER_PAGE`]
/// entries. Out-of-range pages yield an empty slice rather than an error, and
/// page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    paginate_with_size(items, page, names::QUESTIONS_PER_PAGE)
}

pub fn paginate_with_size<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
