//! Failure kinds of a single JSON fetch.

use thiserror::Error;

/// Why a fetch produced no value. Collapsed to `None` by
/// [`DataClient::fetch_json`](super::DataClient::fetch_json).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, reset, invalid URL).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// Response status outside 200..=299.
    #[error("HTTP {0}")]
    Status(u32),
    /// Body was not JSON, or not the expected shape.
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    /// The blocking task running the transfer panicked or was cancelled.
    #[error("fetch task join: {0}")]
    Join(String),
}

impl FetchError {
    /// True for 2xx-but-undecodable responses.
    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}
