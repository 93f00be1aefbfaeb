//! Service health and statistics handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::web::dto::{StatsResponse, StatusResponse};
use crate::web::error::ApiError;

use super::AppState;

/// GET /status - Liveness of the backing stores.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        db: state.db.is_alive().await,
        // The session store is in-process; if we answered, it is alive.
        sessions: true,
    })
}

/// GET /stats - Collection counts.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsResponse>, ApiError> {
    let users = state.db.nb_users().await?;
    let files = state.db.nb_files().await?;

    Ok(Json(StatsResponse { users, files }))
}
