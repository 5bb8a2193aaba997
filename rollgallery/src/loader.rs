//! Background note loading
//!
//! One worker thread per fetch: it runs the blocking HTTP request and hands
//! the result back over a one-slot channel. Dropping the receiver (when a
//! reload supersedes the fetch) discards the worker's result.

use crossbeam_channel::{bounded, Receiver};
use rollcore::notes::Note;
use rollcore::remote::{self, FetchError};

pub type FetchResult = Result<Vec<Note>, FetchError>;

/// Start a fetch on a worker thread.
///
/// The returned receiver yields exactly one result; `ctx` is woken when it
/// arrives so the UI repaints without waiting for input.
pub fn spawn_fetch(url: String, ctx: egui::Context) -> Receiver<FetchResult> {
    let (tx, rx) = bounded(1);
    std::thread::spawn(move || {
        log::info!("loading note data from {url}");
        let result = remote::fetch_notes(&url);
        if let Err(err) = &result {
            log::error!("failed to load note data: {err}");
        }
        // send only fails when a newer fetch dropped the receiver
        let _ = tx.send(result);
        ctx.request_repaint();
    });
    rx
}
