//! CORS middleware configuration.

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

/// Create the CORS layer.
///
/// The API is token-authenticated rather than cookie-authenticated, so a
/// permissive policy without credentials is safe. `X-Token` must be listed
/// explicitly for browsers to send it on cross-origin requests.
pub fn create_cors_layer() -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::PUT, Method::OPTIONS];

    CorsLayer::new()
        .allow_methods(methods)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            ACCEPT,
            HeaderName::from_static("x-token"),
        ])
        .allow_origin(Any)
}
