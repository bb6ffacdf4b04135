//! Pagination-mode arbitration.
//!
//! The backend may omit an exact total for cost reasons. When it reports
//! one, pagination is exact and numbered; when it does not, the client
//! degrades to a load-more affordance driven by a full-page heuristic.

use crate::state::SearchResponse;
use crate::util::format_count;

/// Maximum number of visible page buttons in the pagination bar.
pub const MAX_PAGE_BUTTONS: usize = 7;

/// Pagination decision for one settled search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paging {
    /// Exact total when the backend reported one.
    pub total_hits: Option<u64>,
    /// Whether the backend reported a total.
    pub backend_provided_total: bool,
    /// Whether another page may exist.
    pub has_more: bool,
    /// Stats line for display.
    pub stats: String,
}

/// Decide pagination mode from a response and the paging state of the call
/// that produced it. Pure; the session applies the result.
#[must_use]
pub fn resolve(resp: &SearchResponse, page: usize, limit: usize, returned: usize) -> Paging {
    let ms = resp.processing_time_ms.unwrap_or(0);
    if let Some(total) = resp.estimated_total_hits {
        if total == 0 {
            return Paging {
                total_hits: Some(0),
                backend_provided_total: true,
                has_more: false,
                stats: format!("0 results • {ms} ms"),
            };
        }
        return Paging {
            total_hits: Some(total),
            backend_provided_total: true,
            has_more: ((page * limit + returned) as u64) < total,
            stats: format!("{} results • {ms} ms", format_count(total)),
        };
    }

    if page == 0 && returned == 0 {
        return Paging {
            total_hits: None,
            backend_provided_total: false,
            has_more: false,
            stats: format!("0 results • {ms} ms"),
        };
    }
    // A full page suggests more may exist. Heuristic, not exact.
    Paging {
        total_hits: None,
        backend_provided_total: false,
        has_more: returned == limit,
        stats: format!("{} shown • {ms} ms", page * limit + returned),
    }
}

/// Number of numbered pages for an exact total.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn total_pages(total_hits: u64, limit: usize) -> usize {
    (total_hits as usize).div_ceil(limit)
}

/// Visible page numbers for the pagination bar: all pages when they fit,
/// otherwise a [`MAX_PAGE_BUTTONS`]-wide window centered on `page` and
/// clamped so it never runs past either edge.
#[must_use]
pub fn page_window(page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (0..total_pages).collect();
    }
    let half = MAX_PAGE_BUTTONS / 2;
    let mut start = page.saturating_sub(half);
    let mut end = start + MAX_PAGE_BUTTONS - 1;
    if end >= total_pages {
        end = total_pages - 1;
        start = end.saturating_sub(MAX_PAGE_BUTTONS - 1);
    }
    (start..=end).collect()
}
