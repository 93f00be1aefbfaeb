//! Session handlers: login and logout.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;

use crate::web::dto::TokenResponse;
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::AppState;

/// Parse `Authorization: Basic <base64(email:password)>`.
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;

    // The password may itself contain ':'; only the first one separates.
    let (email, password) = decoded.split_once(':')?;
    Some((email.to_string(), password.to_string()))
}

/// GET /connect - Exchange Basic credentials for a session token.
pub async fn connect(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, ApiError> {
    let (email, password) = basic_credentials(&headers).ok_or_else(ApiError::unauthorized)?;

    let user = state.users.authenticate(&email, &password).await?;
    let token = state.sessions.issue(user.id);

    Ok(Json(TokenResponse { token }))
}

/// GET /disconnect - Revoke the presented session token.
pub async fn disconnect(State(state): State<Arc<AppState>>, auth: AuthUser) -> StatusCode {
    state.sessions.revoke(&auth.token);
    StatusCode::NO_CONTENT
}
