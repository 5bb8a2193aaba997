//! Remote note data access
//!
//! One blocking HTTP GET against a fixed endpoint, returning the full note
//! list as a JSON array. Callers run this off the UI thread.

use crate::notes::Note;
use thiserror::Error;

/// Endpoint serving a JSON array of notes.
pub const NOTES_URL: &str = "https://pianoroll.ai/random_notes";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
    /// Transport failures and JSON decode failures both surface here.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Fetch and decode the note list. Non-2xx statuses are errors; there are
/// no retries and no timeout beyond the client default.
pub fn fetch_notes(url: &str) -> Result<Vec<Note>, FetchError> {
    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.json()?)
}
