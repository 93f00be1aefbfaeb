//! API handlers.

pub mod app;
pub mod auth;
pub mod files;
pub mod users;

pub use app::*;
pub use auth::*;
pub use files::*;
pub use users::*;

use std::sync::Arc;

use crate::auth::SessionManager;
use crate::db::{Database, UserRepository};
use crate::file::{BlobStore, FileService, NodeRepository};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Document store.
    pub db: Database,
    /// User directory.
    pub users: UserRepository,
    /// File service (metadata + blobs + policy).
    pub files: FileService,
    /// Session store.
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, blobs: BlobStore, sessions: Arc<SessionManager>) -> Self {
        let users = UserRepository::new(db.pool().clone());
        let files = FileService::new(NodeRepository::new(db.pool().clone()), blobs);

        Self {
            db,
            users,
            files,
            sessions,
        }
    }
}
