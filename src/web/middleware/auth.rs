//! Session token authentication middleware.

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{request::Parts, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::SessionManager;
use crate::web::error::ApiError;

/// Name of the session token header.
pub const TOKEN_HEADER: &str = "x-token";

fn token_from_parts(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|t| t.to_string())
}

/// Extractor for authenticated users.
///
/// Requires a live session token in the `X-Token` header; the handler
/// receives the resolved user id and the token itself (so logout can
/// revoke it). Rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Resolved user id.
    pub user_id: i64,
    /// The presented session token.
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let token = token_from_parts(parts).ok_or_else(ApiError::unauthorized)?;

            // Get the session manager from extensions (set by middleware)
            let sessions = parts
                .extensions
                .get::<Arc<SessionManager>>()
                .ok_or_else(|| ApiError::internal("Session store not configured"))?;

            let user_id = sessions.validate(&token).ok_or_else(|| {
                tracing::debug!("Rejected unknown or expired session token");
                ApiError::unauthorized()
            })?;

            Ok(AuthUser { user_id, token })
        })
    }
}

/// Optional authentication extractor.
///
/// Similar to [`AuthUser`] but resolves to `None` instead of failing when
/// the token is absent, unknown, or expired. Used by endpoints that serve
/// public nodes to anonymous callers.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<i64>);

impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let token = match token_from_parts(parts) {
                Some(t) => t,
                None => return Ok(OptionalAuthUser(None)),
            };

            let sessions = match parts.extensions.get::<Arc<SessionManager>>() {
                Some(s) => s,
                None => return Ok(OptionalAuthUser(None)),
            };

            Ok(OptionalAuthUser(sessions.validate(&token)))
        })
    }
}

/// Middleware function to inject the session manager into request
/// extensions.
pub async fn session_auth(
    sessions: Arc<SessionManager>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(sessions);
    next.run(request).await
}
