//! Query dispatch: id allocation and channel sends for suggestion refresh
//! and search submission. The ids let the apply site discard anything that
//! resolves after being superseded.

use tokio::sync::mpsc;

use crate::state::{
    Focus, SearchRequest, SessionState, SuggestCommand, SuggestRequest,
};

/// Refresh type-ahead suggestions for the current input.
///
/// With an empty query or an unfocused input this clears the visible
/// suggestions and cancels any pending fetch; no network call is made.
/// Otherwise a fresh id is allocated and the fetch is handed to the
/// suggestion worker, whose quiet period debounces bursts of edits.
pub fn refresh_suggestions(
    session: &mut SessionState,
    suggest_tx: &mpsc::UnboundedSender<SuggestCommand>,
) {
    if session.query.is_empty() || session.focus != Focus::Input {
        session.clear_suggestions();
        let _ = suggest_tx.send(SuggestCommand::Cancel);
        return;
    }
    let id = session.bump_suggest_id();
    let _ = suggest_tx.send(SuggestCommand::Fetch(SuggestRequest {
        id,
        text: session.query.clone(),
    }));
}

/// Submit one authoritative search for `page`.
///
/// An empty trimmed query resets the result area without a network call.
/// Otherwise any suggestion work is preempted first, then the monotonic
/// staleness token is captured and the request handed to the search worker.
pub fn submit_search(
    session: &mut SessionState,
    page: usize,
    suggest_tx: &mpsc::UnboundedSender<SuggestCommand>,
    search_tx: &mpsc::UnboundedSender<SearchRequest>,
) {
    let query = session.query.trim().to_string();
    if query.is_empty() {
        session.clear_for_empty_query();
        let _ = suggest_tx.send(SuggestCommand::Cancel);
        return;
    }

    // Stale suggestions must never linger during a search.
    let _ = suggest_tx.send(SuggestCommand::Cancel);
    session.clear_suggestions();

    let id = session.begin_search();
    tracing::info!(id, page, query = %query, "search submitted");
    let _ = search_tx.send(SearchRequest { id, query, page });
}
