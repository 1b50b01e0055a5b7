//! Note table operations

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension};
use uuid::Uuid;

use super::super::{Database, StoreError, StoreResult};
use crate::models::{CreateNoteRequest, Note, UpdateNoteRequest, validate_content, validate_title};

impl Database {
    /// Insert a new note. Both fields are validated and trimmed; the stored
    /// record carries a generated id and freshly stamped timestamps.
    pub fn create_note(&self, req: &CreateNoteRequest) -> StoreResult<Note> {
        let title = validate_title(req.title.as_deref())?;
        let content = validate_content(req.content.as_deref())?;
        let note = Note::new(title, content);

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO notes (id, title, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                note.id.to_string(),
                note.title,
                note.content,
                note.created_at.to_rfc3339(),
                note.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(note)
    }

    /// Fetch a single note
    pub fn get_note(&self, id: Uuid) -> StoreResult<Note> {
        let conn = self.conn.lock().unwrap();
        Self::query_note(&conn, id)?.ok_or(StoreError::NotFound(id))
    }

    /// List all notes, newest first
    pub fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT id, title, content, created_at, updated_at
             FROM notes ORDER BY created_at DESC",
        )?;

        let notes = stmt
            .query_map([], |row| Self::row_to_note(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(notes)
    }

    /// Apply field changes to a note. Changed fields are re-validated;
    /// `updated_at` is refreshed on every call, even when nothing changed.
    pub fn update_note(&self, id: Uuid, changes: &UpdateNoteRequest) -> StoreResult<Note> {
        let conn = self.conn.lock().unwrap();
        let mut note = Self::query_note(&conn, id)?.ok_or(StoreError::NotFound(id))?;

        if changes.title.is_some() {
            note.title = validate_title(changes.title.as_deref())?;
        }
        if changes.content.is_some() {
            note.content = validate_content(changes.content.as_deref())?;
        }
        note.touch_updated();

        conn.execute(
            "UPDATE notes SET title = ?1, content = ?2, updated_at = ?3 WHERE id = ?4",
            rusqlite::params![
                note.title,
                note.content,
                note.updated_at.to_rfc3339(),
                note.id.to_string(),
            ],
        )?;

        Ok(note)
    }

    /// Delete a note. A missing id is an error, not a no-op.
    pub fn delete_note(&self, id: Uuid) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();

        let rows_affected = conn.execute("DELETE FROM notes WHERE id = ?1", [id.to_string()])?;
        if rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    fn query_note(conn: &Connection, id: Uuid) -> StoreResult<Option<Note>> {
        let mut stmt = conn.prepare(
            "SELECT id, title, content, created_at, updated_at FROM notes WHERE id = ?1",
        )?;

        let note = stmt
            .query_row([id.to_string()], |row| Self::row_to_note(row))
            .optional()?;

        Ok(note)
    }

    fn row_to_note(row: &rusqlite::Row) -> rusqlite::Result<Note> {
        let id_str: String = row.get(0)?;
        let created_at_str: String = row.get(3)?;
        let updated_at_str: String = row.get(4)?;

        Ok(Note {
            id: Uuid::parse_str(&id_str)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?,
            title: row.get(1)?,
            content: row.get(2)?,
            created_at: DateTime::parse_from_rfc3339(&created_at_str)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?
                .with_timezone(&Utc),
            updated_at: DateTime::parse_from_rfc3339(&updated_at_str)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?
                .with_timezone(&Utc),
        })
    }
}
