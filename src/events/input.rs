//! Key handling while the query input owns focus.
//!
//! Implements the suggestion cursor state machine (arrow movement clamped
//! to the list, Enter selecting or submitting, Escape clearing) plus plain
//! text editing, which re-issues the debounced suggestion refresh.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{refresh_suggestions, submit_search};
use crate::state::{Focus, SearchRequest, SessionState, SuggestCommand};

/// Handle one key press on the query input.
pub fn handle_input_key(
    ke: KeyEvent,
    session: &mut SessionState,
    suggest_tx: &mpsc::UnboundedSender<SuggestCommand>,
    search_tx: &mpsc::UnboundedSender<SearchRequest>,
) {
    match (ke.code, ke.modifiers) {
        (KeyCode::Tab, _) => blur_to_results(session, suggest_tx),
        (KeyCode::Esc, _) => {
            session.clear_suggestions();
            let _ = suggest_tx.send(SuggestCommand::Cancel);
        }
        (KeyCode::Down, _) => {
            if session.suggestions.is_empty() {
                if !session.results.is_empty() {
                    blur_to_results(session, suggest_tx);
                }
            } else {
                session.suggestion_cursor_down();
            }
        }
        (KeyCode::Up, _) => session.suggestion_cursor_up(),
        (KeyCode::Char('\n') | KeyCode::Enter, _) => {
            let chosen = session
                .active_suggestion
                .and_then(|i| session.suggestions.get(i))
                .map(crate::state::Hit::plain_title);
            if let Some(title) = chosen {
                session.query = title;
            }
            submit_search(session, 0, suggest_tx, search_tx);
        }
        (KeyCode::Backspace, _) => {
            session.query.pop();
            refresh_suggestions(session, suggest_tx);
        }
        (KeyCode::Char(ch), mods) if !mods.contains(KeyModifiers::CONTROL) => {
            session.query.push(ch);
            refresh_suggestions(session, suggest_tx);
        }
        _ => {}
    }
}

/// Move focus to the results list. Counts as blur: suggestions are cleared
/// and any pending fetch cancelled.
fn blur_to_results(session: &mut SessionState, suggest_tx: &mpsc::UnboundedSender<SuggestCommand>) {
    session.focus = Focus::Results;
    refresh_suggestions(session, suggest_tx);
    if !session.results.is_empty() && session.list_state.selected().is_none() {
        session.selected = 0;
        session.list_state.select(Some(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Hit, SuggestBatch};
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session_with_suggestions(titles: &[&str]) -> SessionState {
        let mut s = SessionState {
            query: "gm".into(),
            ..Default::default()
        };
        let id = s.bump_suggest_id();
        s.apply_suggest_batch(SuggestBatch {
            id,
            hits: titles
                .iter()
                .map(|t| Hit {
                    id: (*t).to_string(),
                    title: Some(format!("<em>{t}</em> site")),
                    ..Default::default()
                })
                .collect(),
        });
        s
    }

    /// What: Enter on an active suggestion replaces the query with the
    /// markup-stripped title and submits a page-0 search.
    ///
    /// - Input: Suggestions present, cursor on the first entry
    /// - Output: Query "gmail site", request with page 0 on the channel
    #[tokio::test]
    async fn enter_selects_active_suggestion() {
        let mut s = session_with_suggestions(&["gmail"]);
        s.suggestion_cursor_down();
        let (suggest_tx, _sr) = mpsc::unbounded_channel();
        let (search_tx, mut search_rx) = mpsc::unbounded_channel();

        handle_input_key(key(KeyCode::Enter), &mut s, &suggest_tx, &search_tx);

        assert_eq!(s.query, "gmail site");
        assert!(s.suggestions.is_empty());
        let req = search_rx.recv().await.expect("search issued");
        assert_eq!(req.page, 0);
        assert_eq!(req.query, "gmail site");
    }

    /// What: Enter with no active cursor submits the typed query as-is.
    #[tokio::test]
    async fn enter_without_cursor_submits_query() {
        let mut s = session_with_suggestions(&["gmail"]);
        let (suggest_tx, _sr) = mpsc::unbounded_channel();
        let (search_tx, mut search_rx) = mpsc::unbounded_channel();

        handle_input_key(key(KeyCode::Enter), &mut s, &suggest_tx, &search_tx);

        assert_eq!(s.query, "gm");
        let req = search_rx.recv().await.expect("search issued");
        assert_eq!(req.query, "gm");
    }

    /// What: Escape clears suggestions and resets the cursor.
    #[test]
    fn escape_clears_suggestions() {
        let mut s = session_with_suggestions(&["a", "b"]);
        s.suggestion_cursor_down();
        let (suggest_tx, _sr) = mpsc::unbounded_channel();
        let (search_tx, _qr) = mpsc::unbounded_channel();

        handle_input_key(key(KeyCode::Esc), &mut s, &suggest_tx, &search_tx);

        assert!(s.suggestions.is_empty());
        assert_eq!(s.active_suggestion, None);
    }

    /// What: Typing edits the query and allocates a fresh suggestion id.
    #[test]
    fn typing_refreshes_suggestions() {
        let mut s = SessionState::default();
        let (suggest_tx, mut rx) = mpsc::unbounded_channel();
        let (search_tx, _qr) = mpsc::unbounded_channel();

        handle_input_key(key(KeyCode::Char('g')), &mut s, &suggest_tx, &search_tx);
        assert_eq!(s.query, "g");
        let Ok(SuggestCommand::Fetch(req)) = rx.try_recv() else {
            panic!("expected fetch");
        };
        assert_eq!(req.text, "g");

        handle_input_key(key(KeyCode::Backspace), &mut s, &suggest_tx, &search_tx);
        assert_eq!(s.query, "");
        assert!(matches!(rx.try_recv(), Ok(SuggestCommand::Cancel)));
    }

    /// What: Arrow movement clamps within the suggestion list.
    #[test]
    fn arrows_clamp_cursor() {
        let mut s = session_with_suggestions(&["a", "b"]);
        let (suggest_tx, _sr) = mpsc::unbounded_channel();
        let (search_tx, _qr) = mpsc::unbounded_channel();

        handle_input_key(key(KeyCode::Down), &mut s, &suggest_tx, &search_tx);
        handle_input_key(key(KeyCode::Down), &mut s, &suggest_tx, &search_tx);
        handle_input_key(key(KeyCode::Down), &mut s, &suggest_tx, &search_tx);
        assert_eq!(s.active_suggestion, Some(1));
        handle_input_key(key(KeyCode::Up), &mut s, &suggest_tx, &search_tx);
        handle_input_key(key(KeyCode::Up), &mut s, &suggest_tx, &search_tx);
        assert_eq!(s.active_suggestion, Some(0));
    }

    /// What: Tab blurs to the results pane and clears suggestions.
    #[test]
    fn tab_blurs_and_clears() {
        let mut s = session_with_suggestions(&["a"]);
        s.results.push(Hit {
            id: "r".into(),
            ..Default::default()
        });
        let (suggest_tx, _sr) = mpsc::unbounded_channel();
        let (search_tx, _qr) = mpsc::unbounded_channel();

        handle_input_key(key(KeyCode::Tab), &mut s, &suggest_tx, &search_tx);

        assert_eq!(s.focus, Focus::Results);
        assert!(s.suggestions.is_empty());
        assert_eq!(s.list_state.selected(), Some(0));
    }
}
