//! SQLite-backed note store.

pub mod sqlite;
pub mod tables;

pub use sqlite::Database;

use thiserror::Error;
use uuid::Uuid;

use crate::models::ValidationError;

/// Store failure taxonomy, surfaced to the routing layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Note not found: {0}")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
