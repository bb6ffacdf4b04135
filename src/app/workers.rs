//! Background workers: suggestion debounce, search fetches, click recording,
//! and the blocking terminal input thread.
//!
//! Every worker communicates over unbounded channels and echoes the issuing
//! id back with its result, so the event loop can drop anything superseded.

use std::time::Duration;

use crossterm::event::{self, Event as CEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio::{select, spawn};

use crate::net::SearchClient;
use crate::state::{PAGE_SIZE, SUGGEST_LIMIT, SearchReply, SearchRequest, SuggestBatch, SuggestCommand};

/// Quiet period after the latest edit before a suggestion fetch is issued.
/// Classic debounce: each newer command restarts the wait.
pub const SUGGEST_DEBOUNCE_MS: u64 = 140;

/// Forward terminal events from a blocking poll loop onto a channel.
pub fn spawn_input_thread(tx: mpsc::UnboundedSender<CEvent>) {
    std::thread::spawn(move || {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50))
                && let Ok(ev) = event::read()
            {
                if tx.send(ev).is_err() {
                    break;
                }
            }
        }
    });
}

/// Coalesce a burst of commands into the latest one, waiting out the quiet
/// period between arrivals. A superseded fetch is never issued at all.
///
/// Returns `None` when the channel closes mid-wait.
pub async fn next_debounced(
    rx: &mut mpsc::UnboundedReceiver<SuggestCommand>,
    quiet: Duration,
) -> Option<SuggestCommand> {
    let mut latest = rx.recv().await?;
    // Cancels take effect immediately; only fetches are worth waiting on.
    while matches!(latest, SuggestCommand::Fetch(_)) {
        select! {
            next = rx.recv() => match next {
                Some(cmd) => latest = cmd,
                None => return None,
            },
            () = sleep(quiet) => break,
        }
    }
    Some(latest)
}

/// Run the suggestion worker: debounce incoming commands, keep at most one
/// fetch in flight, and echo the issuing id with each batch.
///
/// A fetch failure produces an empty batch; suggestion failures are never
/// surfaced to the user.
pub fn spawn_suggest_worker(
    client: SearchClient,
    mut rx: mpsc::UnboundedReceiver<SuggestCommand>,
    tx: mpsc::UnboundedSender<SuggestBatch>,
) {
    spawn(async move {
        let mut in_flight: Option<JoinHandle<()>> = None;
        while let Some(cmd) = next_debounced(&mut rx, Duration::from_millis(SUGGEST_DEBOUNCE_MS)).await
        {
            if let Some(handle) = in_flight.take() {
                handle.abort();
            }
            let SuggestCommand::Fetch(req) = cmd else {
                continue;
            };
            let client = client.clone();
            let tx = tx.clone();
            in_flight = Some(spawn(async move {
                let hits = match client.suggest(&req.text, SUGGEST_LIMIT).await {
                    Ok(resp) => resp.hits,
                    Err(err) => {
                        tracing::debug!(id = req.id, error = %err, "suggest fetch failed");
                        Vec::new()
                    }
                };
                let _ = tx.send(SuggestBatch { id: req.id, hits });
            }));
        }
    });
}

/// Run the search worker: each request gets its own detached fetch so a slow
/// page can never block a newer one. Replies echo the staleness token.
pub fn spawn_search_worker(
    client: SearchClient,
    mut rx: mpsc::UnboundedReceiver<SearchRequest>,
    tx: mpsc::UnboundedSender<SearchReply>,
) {
    spawn(async move {
        while let Some(req) = rx.recv().await {
            let client = client.clone();
            let tx = tx.clone();
            spawn(async move {
                let offset = req.page * PAGE_SIZE;
                let result = client
                    .search(&req.query, PAGE_SIZE, offset)
                    .await
                    .map_err(|e| e.to_string());
                tracing::debug!(id = req.id, page = req.page, ok = result.is_ok(), "search settled");
                let _ = tx.send(SearchReply {
                    id: req.id,
                    page: req.page,
                    result,
                });
            });
        }
    });
}

/// Run the click recorder: at-most-once, no retry, failures swallowed.
pub fn spawn_click_worker(client: SearchClient, mut rx: mpsc::UnboundedReceiver<String>) {
    spawn(async move {
        while let Some(id) = rx.recv().await {
            let client = client.clone();
            spawn(async move {
                if let Err(err) = client.record_click(&id).await {
                    tracing::debug!(id = %id, error = %err, "click recording failed");
                }
            });
        }
    });
}
