//! Failure normalization for client calls.

use serde::Deserialize;
use thiserror::Error;

/// Error body shape served by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Everything a client call can fail with. Exactly one variant per failure
/// mode; `Display` is the human-readable message callers show.
#[derive(Debug, Error)]
pub enum NotesApiError {
    /// The server responded with a non-success status
    #[error("{message}")]
    Server {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The request went out but no response came back
    #[error("Unable to connect to server. Please check if the backend is running.")]
    Connectivity,

    /// The request could not be built or sent, or a success body failed to decode
    #[error("An unexpected error occurred")]
    Unexpected,
}

impl NotesApiError {
    /// Classify a transport-level `reqwest` failure
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            NotesApiError::Connectivity
        } else {
            log::debug!("Unexpected transport error: {}", err);
            NotesApiError::Unexpected
        }
    }

    /// Build a `Server` error from a non-success response, preferring the
    /// server-supplied `message` field over the generic fallback.
    pub(crate) async fn from_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| "Server error occurred".to_string());

        NotesApiError::Server { status, message }
    }
}
