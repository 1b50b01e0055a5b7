//! Typed HTTP client for the notes REST API.
//!
//! Five operations (list, get, create, update, delete) against a fixed base
//! URL, one attempt per call with no retries. Every failure is normalized
//! into a [`NotesApiError`] before it reaches the caller; raw `reqwest`
//! errors never escape.
//!
//! The client is a plain value: construct one and pass it to whatever needs
//! it. There is no global instance.

mod error;

pub use error::NotesApiError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Backend address used by [`NotesClient::default`]
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub struct NotesClient {
    base_url: String,
    client: reqwest::Client,
}

// ── Wire types ──────────────────────────────────────

/// A note as served by the backend (camelCase JSON, ISO-8601 timestamps).
/// Local mirror of the backend schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for create calls
#[derive(Debug, Clone, Serialize)]
pub struct CreateNoteBody {
    pub title: String,
    pub content: String,
}

/// Body for update calls; absent fields are left unchanged server-side
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateNoteBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Confirmation body returned by a successful delete
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

// ── Client impl ─────────────────────────────────────

impl NotesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// List all notes
    pub async fn list_notes(&self) -> Result<Vec<Note>, NotesApiError> {
        let resp = self
            .client
            .get(format!("{}/api/notes", self.base_url))
            .send()
            .await
            .map_err(NotesApiError::from_transport)?;

        Self::read_json(resp).await
    }

    /// Fetch a single note by id
    pub async fn get_note(&self, id: Uuid) -> Result<Note, NotesApiError> {
        let resp = self
            .client
            .get(format!("{}/api/notes/{}", self.base_url, id))
            .send()
            .await
            .map_err(NotesApiError::from_transport)?;

        Self::read_json(resp).await
    }

    /// Create a note and return the stored record
    pub async fn create_note(&self, body: &CreateNoteBody) -> Result<Note, NotesApiError> {
        let resp = self
            .client
            .post(format!("{}/api/notes", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(NotesApiError::from_transport)?;

        Self::read_json(resp).await
    }

    /// Update a note and return the stored record with its refreshed
    /// `updatedAt`
    pub async fn update_note(
        &self,
        id: Uuid,
        changes: &UpdateNoteBody,
    ) -> Result<Note, NotesApiError> {
        let resp = self
            .client
            .put(format!("{}/api/notes/{}", self.base_url, id))
            .json(changes)
            .send()
            .await
            .map_err(NotesApiError::from_transport)?;

        Self::read_json(resp).await
    }

    /// Delete a note
    pub async fn delete_note(&self, id: Uuid) -> Result<DeleteConfirmation, NotesApiError> {
        let resp = self
            .client
            .delete(format!("{}/api/notes/{}", self.base_url, id))
            .send()
            .await
            .map_err(NotesApiError::from_transport)?;

        Self::read_json(resp).await
    }

    /// Decode a response body, routing non-success statuses and decode
    /// failures through the error taxonomy. Shared by all five operations.
    async fn read_json<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, NotesApiError> {
        if !resp.status().is_success() {
            return Err(NotesApiError::from_response(resp).await);
        }

        resp.json::<T>().await.map_err(NotesApiError::from_transport)
    }
}

impl Default for NotesClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
