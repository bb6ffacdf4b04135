//! Key handling while the results list owns focus: selection movement,
//! page navigation, and opening a result.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::paging::page_window;
use crate::logic::{refresh_suggestions, submit_search};
use crate::state::{Focus, SearchRequest, SessionState, SuggestCommand};
use crate::util::open_url;

/// Handle one key press on the results list.
pub fn handle_results_key(
    ke: KeyEvent,
    session: &mut SessionState,
    suggest_tx: &mpsc::UnboundedSender<SuggestCommand>,
    search_tx: &mpsc::UnboundedSender<SearchRequest>,
    click_tx: &mpsc::UnboundedSender<String>,
) {
    match ke.code {
        KeyCode::Tab | KeyCode::Esc | KeyCode::Char('/') => {
            session.focus = Focus::Input;
            // Focus change re-arms the suggestion fetch for the current text.
            refresh_suggestions(session, suggest_tx);
        }
        KeyCode::Up | KeyCode::Char('k') => session.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => session.move_selection(1),
        KeyCode::PageUp => session.move_selection(-10),
        KeyCode::PageDown => session.move_selection(10),
        KeyCode::Enter => {
            if let Some(hit) = session.results.get(session.selected) {
                // Click recording is fire-and-forget; opening never waits on it.
                let _ = click_tx.send(hit.id.clone());
                open_url(&hit.url);
            }
        }
        KeyCode::Left => {
            if !session.loading && session.page > 0 {
                let target = session.page - 1;
                submit_search(session, target, suggest_tx, search_tx);
            }
        }
        KeyCode::Right => {
            if !session.loading {
                let next = session.page + 1;
                let numbered = session.total_pages();
                let advance = if numbered > 0 {
                    next < numbered
                } else {
                    session.has_more
                };
                if advance {
                    submit_search(session, next, suggest_tx, search_tx);
                }
            }
        }
        // Digits jump straight to a visible page button, counted from the
        // left of the pagination bar.
        KeyCode::Char(ch @ '1'..='9') => {
            if !session.loading {
                let window = page_window(session.page, session.total_pages());
                let slot = (ch as usize) - ('1' as usize);
                if let Some(&target) = window.get(slot)
                    && target != session.page
                {
                    submit_search(session, target, suggest_tx, search_tx);
                }
            }
        }
        _ => {}
    }
}
