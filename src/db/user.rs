//! User account records.

use serde::Serialize;
use sqlx::FromRow;

/// A registered account in the user directory.
///
/// `password` holds the hex-encoded digest of the password, never the
/// plaintext. It is excluded from serialization so it can never leak into
/// an API response.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    /// Unique user id (SQLite rowid).
    pub id: i64,
    /// Email address, unique across the directory.
    pub email: String,
    /// Hex-encoded password digest.
    #[serde(skip_serializing)]
    pub password: String,
    /// Creation timestamp (UTC, `datetime('now')` format).
    pub created_at: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    /// Hex-encoded password digest (already hashed by the caller).
    pub password: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
