//! Application runtime: terminal lifecycle, worker wiring, and the event
//! loop that is the sole mutator of [`SessionState`].

mod terminal;
pub mod workers;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::config::Settings;
use crate::logic;
use crate::net::SearchClient;
use crate::state::{SearchReply, SearchRequest, SessionState, SuggestBatch, SuggestCommand};
use crate::ui::ui;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Start the Loupe TUI and run the main event loop.
///
/// - Initializes the terminal (raw mode, alternate screen)
/// - Builds the HTTP client and spawns the suggestion, search, click, and
///   input workers
/// - Drives rendering via `ratatui` and delegates input to `events`
/// - Submits `initial_query` at page 0 when present
///
/// Returns `Ok(())` on normal shutdown or an error if initialization fails.
pub async fn run(settings: Settings, initial_query: Option<String>) -> Result<()> {
    let client = SearchClient::new(&settings.base_url)?;
    tracing::info!(base_url = %settings.base_url, "backend configured");

    terminal::setup_terminal()?;
    let mut term = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut session = SessionState::default();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (suggest_tx, suggest_rx) = mpsc::unbounded_channel::<SuggestCommand>();
    let (suggest_batch_tx, mut suggest_batch_rx) = mpsc::unbounded_channel::<SuggestBatch>();
    let (search_tx, search_rx) = mpsc::unbounded_channel::<SearchRequest>();
    let (search_reply_tx, mut search_reply_rx) = mpsc::unbounded_channel::<SearchReply>();
    let (click_tx, click_rx) = mpsc::unbounded_channel::<String>();

    workers::spawn_input_thread(event_tx);
    workers::spawn_suggest_worker(client.clone(), suggest_rx, suggest_batch_tx);
    workers::spawn_search_worker(client.clone(), search_rx, search_reply_tx);
    workers::spawn_click_worker(client, click_rx);

    if let Some(q) = initial_query {
        session.query = q;
        logic::submit_search(&mut session, 0, &suggest_tx, &search_tx);
    }

    loop {
        let _ = term.draw(|f| ui(f, &mut session));

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut session, &suggest_tx, &search_tx, &click_tx) {
                    break;
                }
            }
            Some(batch) = suggest_batch_rx.recv() => session.apply_suggest_batch(batch),
            Some(reply) = search_reply_rx.recv() => session.apply_search_reply(reply),
            else => break,
        }
    }

    terminal::restore_terminal()?;
    Ok(())
}
