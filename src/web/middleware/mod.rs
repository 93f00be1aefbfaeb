//! Middleware for the Web API.

pub mod auth;
pub mod cors;

pub use auth::{session_auth, AuthUser, OptionalAuthUser};
pub use cors::create_cors_layer;
