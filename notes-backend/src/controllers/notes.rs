//! Notes REST API: CRUD endpoints over the note store.
//!
//! Store errors map onto HTTP statuses here: validation failures become 400,
//! unknown ids become 404, database failures are logged and become 500. Every
//! error body carries a `message` field.

use actix_web::{HttpResponse, Responder, web};
use uuid::Uuid;

use crate::AppState;
use crate::db::StoreError;
use crate::models::{CreateNoteRequest, UpdateNoteRequest};

/// Parse a path id. Malformed ids take the not-found path so unknown and
/// unparseable identifiers are indistinguishable to callers.
fn parse_note_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw).map_err(|_| {
        HttpResponse::NotFound().json(serde_json::json!({
            "message": "Note not found"
        }))
    })
}

/// List all notes, newest first
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    match data.db.list_notes() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => {
            log::error!("Failed to list notes: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Internal server error"
            }))
        }
    }
}

/// Get a note by id
async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_note_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.db.get_note(id) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(StoreError::NotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Note not found"
        })),
        Err(e) => {
            log::error!("Failed to get note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Internal server error"
            }))
        }
    }
}

/// Create a note
async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    match data.db.create_note(&body) {
        Ok(note) => HttpResponse::Created().json(note),
        Err(StoreError::Validation(e)) => HttpResponse::BadRequest().json(serde_json::json!({
            "message": e.to_string()
        })),
        Err(e) => {
            log::error!("Failed to create note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Internal server error"
            }))
        }
    }
}

/// Update a note; `updatedAt` is refreshed on every successful call
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateNoteRequest>,
) -> impl Responder {
    let id = match parse_note_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.db.update_note(id, &body) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(StoreError::Validation(e)) => HttpResponse::BadRequest().json(serde_json::json!({
            "message": e.to_string()
        })),
        Err(StoreError::NotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Note not found"
        })),
        Err(e) => {
            log::error!("Failed to update note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Internal server error"
            }))
        }
    }
}

/// Delete a note. Deleting an unknown id is a 404, not a no-op.
async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_note_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.db.delete_note(id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Note deleted successfully"
        })),
        Err(StoreError::NotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Note not found"
        })),
        Err(e) => {
            log::error!("Failed to delete note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Internal server error"
            }))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::put().to(update_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
