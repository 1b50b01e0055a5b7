//! Database connection handling and schema bootstrap.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

use super::StoreResult;

/// SQLite handle shared across request handlers
pub struct Database {
    pub(crate) conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database file and ensure the schema exists.
    /// Parent directories are created as needed.
    pub fn new(database_url: &str) -> StoreResult<Self> {
        if let Some(parent) = Path::new(database_url).parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let conn = Connection::open(database_url)?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init_tables()?;

        Ok(db)
    }

    /// In-memory database, used by tests
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init_tables()?;

        Ok(db)
    }

    fn init_tables(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateNoteRequest;
    use tempfile::tempdir;

    #[test]
    fn test_new_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("notes.db");

        let db = Database::new(db_path.to_str().unwrap()).expect("Failed to initialize database");

        let req = CreateNoteRequest {
            title: Some("Persisted".to_string()),
            content: Some("On disk".to_string()),
        };
        db.create_note(&req).expect("Failed to create note");

        assert!(db_path.exists());
    }

    #[test]
    fn test_reopen_preserves_rows() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("notes.db");
        let path = db_path.to_str().unwrap();

        let created = {
            let db = Database::new(path).expect("Failed to initialize database");
            db.create_note(&CreateNoteRequest {
                title: Some("Durable".to_string()),
                content: Some("Survives reopen".to_string()),
            })
            .expect("Failed to create note")
        };

        let db = Database::new(path).expect("Failed to reopen database");
        let fetched = db.get_note(created.id).expect("Failed to get note");

        assert_eq!(fetched.title, "Durable");
        assert_eq!(fetched.created_at, created.created_at);
    }
}
