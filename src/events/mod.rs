//! Terminal event handling.
//!
//! `handle_event` dispatches key events to the pane that owns keyboard
//! focus. Handlers mutate [`SessionState`] directly and hand asynchronous
//! work to the workers over channels; they never block.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{Focus, SearchRequest, SessionState, SuggestCommand};

mod input;
mod results;

/// Dispatch a single terminal event.
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    session: &mut SessionState,
    suggest_tx: &mpsc::UnboundedSender<SuggestCommand>,
    search_tx: &mpsc::UnboundedSender<SearchRequest>,
    click_tx: &mpsc::UnboundedSender<String>,
) -> bool {
    if let CEvent::Key(ke) = ev {
        if ke.kind != KeyEventKind::Press {
            return false;
        }
        if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        match session.focus {
            Focus::Input => input::handle_input_key(ke, session, suggest_tx, search_tx),
            Focus::Results => {
                results::handle_results_key(ke, session, suggest_tx, search_tx, click_tx);
            }
        }
    }
    false
}
