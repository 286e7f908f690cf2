use serde::Serialize;

/// One-based page numbers to render, `None` marking a gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Pager controls for a zero-based `page`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
    /// Zero-based page links with gaps; the current page may lie outside.
    pub pages: Vec<Option<u32>>,
}

impl Pager {
    /// Prev is enabled only past the first page, Next only before the last
    /// one, and neither while a request is in flight.
    pub fn new(page: u32, total_pages: u64, loading: bool) -> Self {
        let has_prev = !loading && page > 0;
        let has_next = !loading && u64::from(page) + 1 < total_pages;

        let window_total = usize::try_from(total_pages).unwrap_or(usize::MAX);
        let current = usize::try_from(page).map_or(usize::MAX, |p| p.saturating_add(1));
        let pages = get_pages(window_total, current, 2, 2, 4, 2)
            .into_iter()
            .map(|p| p.and_then(|p| u32::try_from(p - 1).ok()))
            .collect();

        Self {
            page,
            total_pages,
            has_prev,
            has_next,
            prev_page: has_prev.then(|| page - 1),
            next_page: has_next.then(|| page + 1),
            pages,
        }
    }

    /// One-based page number shown to the user.
    pub fn display_page(&self) -> u64 {
        u64::from(self.page) + 1
    }
}
