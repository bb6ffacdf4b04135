//! Incremental result accumulation across pages.

use std::collections::HashSet;

use crate::state::Hit;

/// Merge one fetched page into the accumulated results.
///
/// Page 0 replaces the list wholesale. Later pages append only hits whose
/// `id` is not already present, preserving order with the first occurrence
/// winning. Guards against the backend returning overlapping pages.
pub fn merge_page(results: &mut Vec<Hit>, page: usize, incoming: Vec<Hit>) {
    if page == 0 {
        *results = incoming;
        return;
    }
    let mut seen: HashSet<String> = results.iter().map(|h| h.id.clone()).collect();
    for hit in incoming {
        if seen.insert(hit.id.clone()) {
            results.push(hit);
        }
    }
}
