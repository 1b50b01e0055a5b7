//! Notes REST backend: a SQLite-backed note store behind an actix-web CRUD
//! surface.
//!
//! The binary in `main.rs` wires configuration, logging, and the HTTP server
//! together; everything else lives here so integration tests can mount the
//! real service.

pub mod config;
pub mod controllers;
pub mod db;
pub mod models;

use std::sync::Arc;

use db::Database;

/// Shared state handed to every request handler
pub struct AppState {
    pub db: Arc<Database>,
}
