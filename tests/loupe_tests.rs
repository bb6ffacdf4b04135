//! End-to-end tests of the search session logic: pagination-mode
//! arbitration, page merging, and staleness guarding, driven through the
//! same transitions the event loop uses.

use loupe::logic::paging::{self, page_window};
use loupe::state::{Hit, PAGE_SIZE, SearchReply, SearchRequest, SearchResponse, SessionState};
use tokio::sync::mpsc;

fn hit(id: &str, title: &str) -> Hit {
    Hit {
        id: id.to_string(),
        url: format!("https://example.com/{id}"),
        title: Some(title.to_string()),
        ..Default::default()
    }
}

fn page_of(prefix: &str, n: usize) -> Vec<Hit> {
    (0..n)
        .map(|i| hit(&format!("{prefix}{i}"), &format!("{prefix} {i}")))
        .collect()
}

fn ok_reply(id: u64, page: usize, hits: Vec<Hit>, total: Option<u64>, ms: u64) -> SearchReply {
    SearchReply {
        id,
        page,
        result: Ok(SearchResponse {
            hits,
            estimated_total_hits: total,
            processing_time_ms: Some(ms),
        }),
    }
}

#[test]
fn gmail_scenario_exact_pagination() {
    let mut s = SessionState {
        query: "gmail".into(),
        ..Default::default()
    };
    let id = s.begin_search();
    s.apply_search_reply(ok_reply(id, 0, page_of("g", 10), Some(42), 7));

    assert_eq!(s.stats, "42 results • 7 ms");
    assert!(s.has_more);
    assert_eq!(s.total_pages(), 5);
    assert_eq!(s.results.len(), 10);
    assert_eq!(s.page, 0);
    assert!(!s.loading);
}

#[test]
fn not_found_scenario_zero_state() {
    let mut s = SessionState {
        query: "xyzzynotfound".into(),
        ..Default::default()
    };
    let id = s.begin_search();
    s.apply_search_reply(ok_reply(id, 0, Vec::new(), Some(0), 3));

    assert_eq!(s.stats, "0 results • 3 ms");
    assert!(s.results.is_empty());
    assert!(!s.has_more);
    // No pagination controls: nothing numbered, nothing to load.
    assert_eq!(s.total_pages(), 0);
    assert!(page_window(s.page, s.total_pages()).is_empty());
}

#[test]
fn zero_total_beats_nonempty_hits() {
    let mut s = SessionState::default();
    let id = s.begin_search();
    s.apply_search_reply(ok_reply(id, 0, page_of("x", 3), Some(0), 1));
    assert!(!s.has_more, "estimatedTotalHits = 0 always means no more");
}

#[test]
fn heuristic_has_more_tracks_page_fill() {
    let full = paging::resolve(
        &SearchResponse {
            hits: page_of("a", PAGE_SIZE),
            estimated_total_hits: None,
            processing_time_ms: Some(4),
        },
        0,
        PAGE_SIZE,
        PAGE_SIZE,
    );
    assert!(full.has_more);

    let short = paging::resolve(
        &SearchResponse {
            hits: page_of("a", PAGE_SIZE - 1),
            estimated_total_hits: None,
            processing_time_ms: Some(4),
        },
        0,
        PAGE_SIZE,
        PAGE_SIZE - 1,
    );
    assert!(!short.has_more);
}

#[test]
fn later_page_merge_dedupes_and_keeps_order() {
    let mut s = SessionState {
        query: "overlap".into(),
        ..Default::default()
    };
    let id = s.begin_search();
    s.apply_search_reply(ok_reply(id, 0, page_of("a", 10), None, 2));
    assert_eq!(s.results.len(), 10);

    // The backend returns an overlapping page: first two entries repeat.
    let mut overlap = vec![hit("a8", "a 8"), hit("a9", "a 9")];
    overlap.extend(page_of("b", 8));
    let id = s.begin_search();
    s.apply_search_reply(ok_reply(id, 1, overlap, None, 2));

    assert_eq!(s.results.len(), 18);
    let ids: Vec<&str> = s.results.iter().map(|h| h.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len(), "no duplicate ids after merge");
    assert_eq!(ids[8], "a8", "first occurrence position wins");
    assert_eq!(s.page, 1);
    assert_eq!(s.stats, "18 shown • 2 ms");
}

#[test]
fn superseded_search_never_overwrites_newer_one() {
    let mut s = SessionState {
        query: "race".into(),
        ..Default::default()
    };
    // Seed page 0 so a page-1 fetch makes sense.
    let id = s.begin_search();
    s.apply_search_reply(ok_reply(id, 0, page_of("a", 10), Some(30), 1));

    // A page-1 search is issued, then immediately superseded by a fresh
    // page-0 search. The page-0 reply lands first.
    let stale_id = s.begin_search();
    let fresh_id = s.begin_search();
    s.apply_search_reply(ok_reply(fresh_id, 0, page_of("fresh", 5), Some(5), 9));

    let stats_before = s.stats.clone();
    let results_before: Vec<String> = s.results.iter().map(|h| h.id.clone()).collect();

    // The stale page-1 reply resolves afterwards and must change nothing.
    s.apply_search_reply(ok_reply(stale_id, 1, page_of("late", 10), Some(30), 1));

    assert_eq!(s.page, 0);
    assert_eq!(s.stats, stats_before);
    let results_after: Vec<String> = s.results.iter().map(|h| h.id.clone()).collect();
    assert_eq!(results_after, results_before);
    assert!(!s.loading);
}

#[test]
fn request_ids_only_increase() {
    let mut s = SessionState {
        query: "abc".into(),
        ..Default::default()
    };
    let (suggest_tx, _sr) = mpsc::unbounded_channel();
    let (search_tx, _qr) = mpsc::unbounded_channel::<SearchRequest>();

    let mut last = 0;
    for _ in 0..5 {
        loupe::logic::submit_search(&mut s, 0, &suggest_tx, &search_tx);
        assert!(s.request_id > last);
        last = s.request_id;
    }
    // An empty submission clears state but never rewinds the token.
    s.query = "  ".into();
    loupe::logic::submit_search(&mut s, 0, &suggest_tx, &search_tx);
    assert_eq!(s.request_id, last);
}

#[test]
fn pagination_window_edges() {
    assert_eq!(page_window(15, 20), vec![13, 14, 15, 16, 17, 18, 19]);
    assert_eq!(page_window(0, 20), vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(page_window(3, 7), vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(page_window(2, 3), vec![0, 1, 2]);
}

#[test]
fn failure_is_terminal_for_that_call_only() {
    let mut s = SessionState {
        query: "flaky".into(),
        ..Default::default()
    };
    let id = s.begin_search();
    s.apply_search_reply(SearchReply {
        id,
        page: 0,
        result: Err("timeout".into()),
    });
    assert_eq!(s.stats, "0 results • 0 ms");

    // Resubmitting works normally afterwards.
    let id = s.begin_search();
    s.apply_search_reply(ok_reply(id, 0, page_of("ok", 2), Some(2), 1));
    assert_eq!(s.results.len(), 2);
    assert_eq!(s.stats, "2 results • 1 ms");
}
