//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    connect, disconnect, get_file, get_file_data, get_files, get_me, get_stats, get_status,
    post_file, post_user, publish_file, unpublish_file, AppState,
};
use super::middleware::{create_cors_layer, session_auth};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let sessions = app_state.sessions.clone();

    Router::new()
        .route("/status", get(get_status))
        .route("/stats", get(get_stats))
        .route("/users", post(post_user))
        .route("/users/me", get(get_me))
        .route("/connect", get(connect))
        .route("/disconnect", get(disconnect))
        .route("/files", post(post_file).get(get_files))
        .route("/files/:id", get(get_file))
        .route("/files/:id/publish", put(publish_file))
        .route("/files/:id/unpublish", put(unpublish_file))
        .route("/files/:id/data", get(get_file_data))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer())
                .layer(middleware::from_fn(move |req, next| {
                    let sessions = sessions.clone();
                    session_auth(sessions, req, next)
                })),
        )
        .with_state(app_state)
}
