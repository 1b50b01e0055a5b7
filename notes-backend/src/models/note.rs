//! Note data model and field validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum title length in characters, counted after trimming
pub const MAX_TITLE_LENGTH: usize = 100;

/// A stored note
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a fresh note with a generated id and both timestamps set to now.
    /// Fields must already be validated.
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`. Called at the start of every persisting update,
    /// never on reads or deletes.
    pub fn touch_updated(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Request to create a note. Fields deserialize as optional so a missing
/// field and an empty one surface the same validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Request to update a note; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title cannot exceed 100 characters")]
    TitleTooLong,

    #[error("Content is required")]
    ContentRequired,
}

/// Validate a candidate title, returning the trimmed value
pub fn validate_title(raw: Option<&str>) -> Result<String, ValidationError> {
    let title = raw.unwrap_or_default().trim();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(title.to_string())
}

/// Validate candidate content, returning the trimmed value
pub fn validate_content(raw: Option<&str>) -> Result<String, ValidationError> {
    let content = raw.unwrap_or_default().trim();
    if content.is_empty() {
        return Err(ValidationError::ContentRequired);
    }
    Ok(content.to_string())
}
