//! filedepot - a personal file-storage service.
//!
//! Accounts live in a user directory keyed by email; clients authenticate
//! with Basic credentials and trade them for opaque session tokens held in
//! an expiring in-process store. Files form a folder hierarchy whose
//! metadata lives in SQLite and whose content lives in a UUID-named blob
//! store on disk, served over a small JSON HTTP API.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod web;

pub use config::Config;
pub use db::Database;
pub use error::{DepotError, Result};
