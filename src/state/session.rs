//! The session container: every piece of state one query lifecycle owns,
//! mutated only through the named transitions below. The event loop is the
//! sole caller, so overlapping asynchronous work can never race a write.

use ratatui::widgets::ListState;

use crate::logic::{merge, paging};
use crate::state::types::{Focus, Hit, SearchReply, SuggestBatch};

/// Results page size; offsets are computed as `page * PAGE_SIZE`.
pub const PAGE_SIZE: usize = 10;
/// Maximum number of type-ahead suggestions kept and requested.
pub const SUGGEST_LIMIT: usize = 6;

/// State for one search session, created per run and discarded on exit.
#[derive(Debug)]
pub struct SessionState {
    /// Current query input text.
    pub query: String,
    /// Which pane owns keyboard input.
    pub focus: Focus,
    /// Live type-ahead suggestions for the current input.
    pub suggestions: Vec<Hit>,
    /// Highlighted suggestion, if any.
    pub active_suggestion: Option<usize>,
    /// Accumulated results across fetched pages, no duplicate ids.
    pub results: Vec<Hit>,
    /// Index into `results` currently highlighted.
    pub selected: usize,
    /// List widget state for the results pane.
    pub list_state: ListState,
    /// Whether a search is in flight for the current `request_id`.
    pub loading: bool,
    /// Page of the last successfully completed search (zero-based).
    pub page: usize,
    /// Backend-reported total, `Some(0)` after a failed search, `None` when
    /// the backend did not report one.
    pub total_hits: Option<u64>,
    /// Whether the backend reported a total for the last search; `None`
    /// before any search settles or after a failure.
    pub backend_provided_total: Option<bool>,
    /// Whether another page may exist (exact or heuristic, see
    /// [`paging::resolve`]).
    pub has_more: bool,
    /// Human-readable result statistics line.
    pub stats: String,
    /// Monotonic staleness token for searches; only ever increases.
    pub request_id: u64,
    /// Identifier of the suggestion request whose batch may still be applied.
    pub latest_suggest_id: u64,
    /// Next suggestion identifier to allocate.
    pub next_suggest_id: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            query: String::new(),
            focus: Focus::Input,
            suggestions: Vec::new(),
            active_suggestion: None,
            results: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            loading: false,
            page: 0,
            total_hits: None,
            backend_provided_total: None,
            has_more: false,
            stats: String::new(),
            request_id: 0,
            latest_suggest_id: 0,
            next_suggest_id: 1,
        }
    }
}

impl SessionState {
    /// Allocate a fresh suggestion id and mark it as the one whose batch may
    /// be applied.
    pub fn bump_suggest_id(&mut self) -> u64 {
        let id = self.next_suggest_id;
        self.next_suggest_id += 1;
        self.latest_suggest_id = id;
        id
    }

    /// Drop the visible suggestions and invalidate any batch still in
    /// flight, so a late arrival can never repopulate the list.
    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.active_suggestion = None;
        self.latest_suggest_id = self.next_suggest_id;
        self.next_suggest_id += 1;
    }

    /// Apply a suggestion batch, unless it was superseded meanwhile.
    pub fn apply_suggest_batch(&mut self, batch: SuggestBatch) {
        if batch.id != self.latest_suggest_id {
            tracing::trace!(id = batch.id, "dropping stale suggestion batch");
            return;
        }
        self.suggestions = batch.hits;
        self.suggestions.truncate(SUGGEST_LIMIT);
        self.active_suggestion = None;
    }

    /// Move the suggestion cursor one step toward the end, clamped.
    pub fn suggestion_cursor_down(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.active_suggestion = Some(self.active_suggestion.map_or(0, |i| (i + 1).min(last)));
    }

    /// Move the suggestion cursor one step toward the start, clamped at 0.
    /// With no cursor yet, lands on the first entry.
    pub fn suggestion_cursor_up(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.active_suggestion = Some(self.active_suggestion.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Start an authoritative search: flips the loading flag and returns the
    /// freshly captured staleness token.
    pub fn begin_search(&mut self) -> u64 {
        self.loading = true;
        self.request_id += 1;
        self.request_id
    }

    /// Reset the result area for an empty submitted query. No network call
    /// is associated with this transition.
    pub fn clear_for_empty_query(&mut self) {
        self.results.clear();
        self.clear_suggestions();
        self.selected = 0;
        self.list_state.select(None);
        self.total_hits = None;
        self.backend_provided_total = None;
        self.has_more = false;
        self.stats.clear();
    }

    /// Apply a settled search, unless a newer search was issued meanwhile.
    ///
    /// A stale reply is discarded wholesale: no field changes, the loading
    /// flag included, since the newer call owns it.
    pub fn apply_search_reply(&mut self, reply: SearchReply) {
        if reply.id != self.request_id {
            tracing::debug!(
                id = reply.id,
                current = self.request_id,
                "dropping stale search reply"
            );
            return;
        }
        self.loading = false;
        match reply.result {
            Ok(resp) => {
                let returned = resp.hits.len();
                let paging = paging::resolve(&resp, reply.page, PAGE_SIZE, returned);
                merge::merge_page(&mut self.results, reply.page, resp.hits);
                self.total_hits = paging.total_hits;
                self.backend_provided_total = Some(paging.backend_provided_total);
                self.has_more = paging.has_more;
                self.stats = paging.stats;
                self.page = reply.page;
                if reply.page == 0 {
                    self.scroll_results_to_top();
                } else {
                    self.selected = self.selected.min(self.results.len().saturating_sub(1));
                }
                tracing::info!(
                    id = reply.id,
                    page = reply.page,
                    returned,
                    total = self.results.len(),
                    "search applied"
                );
            }
            Err(err) => {
                tracing::warn!(id = reply.id, error = %err, "search failed");
                self.results.clear();
                self.selected = 0;
                self.list_state.select(None);
                self.stats = "0 results • 0 ms".to_string();
                self.total_hits = Some(0);
                self.has_more = false;
                self.backend_provided_total = None;
            }
        }
    }

    /// Number of numbered pages when the backend reported an exact total;
    /// 0 in heuristic (load-more) mode.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        if self.backend_provided_total == Some(true) {
            paging::total_pages(self.total_hits.unwrap_or(0), PAGE_SIZE)
        } else {
            0
        }
    }

    /// Move the result selection by `delta`, clamped to the list bounds.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn move_selection(&mut self, delta: isize) {
        if self.results.is_empty() {
            return;
        }
        let last = self.results.len() - 1;
        let cur = self.selected as isize;
        self.selected = cur.saturating_add(delta).clamp(0, last as isize) as usize;
        self.list_state.select(Some(self.selected));
    }

    fn scroll_results_to_top(&mut self) {
        self.selected = 0;
        *self.list_state.offset_mut() = 0;
        self.list_state
            .select(if self.results.is_empty() { None } else { Some(0) });
    }
}
