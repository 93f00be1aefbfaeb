//! File namespace handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;

use crate::file::{CreateNode, NodeType};
use crate::web::dto::{ListQuery, NodeResponse, UploadRequest};
use crate::web::error::ApiError;
use crate::web::middleware::{AuthUser, OptionalAuthUser};

use super::AppState;

fn parse_node_id(raw: &str) -> Result<i64, ApiError> {
    // An unparseable id can never name a node; same outcome either way.
    raw.parse().map_err(|_| ApiError::not_found())
}

/// POST /files - Create a folder, file, or image node.
pub async fn post_file(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(req): Json<UploadRequest>,
) -> Result<(StatusCode, Json<NodeResponse>), ApiError> {
    let name = req
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing name"))?;

    let node_type = req
        .node_type
        .as_deref()
        .and_then(|t| NodeType::try_from(t.to_string()).ok())
        .ok_or_else(|| ApiError::bad_request("Missing type"))?;

    // Folders carry no content; data is ignored for them.
    let data = if node_type.has_content() {
        let encoded = req
            .data
            .as_deref()
            .ok_or_else(|| ApiError::bad_request("Missing data"))?;
        let decoded = STANDARD
            .decode(encoded)
            .map_err(|_| ApiError::bad_request("Missing data"))?;
        Some(decoded)
    } else {
        None
    };

    let parent_id = req
        .resolved_parent_id()
        .ok_or_else(|| ApiError::bad_request("Parent not found"))?;

    let node = state
        .files
        .create(
            auth.user_id,
            CreateNode {
                name,
                node_type,
                parent_id,
                is_public: req.is_public,
                data,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(NodeResponse::from(node))))
}

/// GET /files/:id - Fetch one node's metadata.
pub async fn get_file(
    State(state): State<Arc<AppState>>,
    auth: OptionalAuthUser,
    Path(id): Path<String>,
) -> Result<Json<NodeResponse>, ApiError> {
    let id = parse_node_id(&id)?;
    let node = state.files.get_node(id, auth.0).await?;

    Ok(Json(NodeResponse::from(node)))
}

/// GET /files - List one page of the caller's children of a parent.
pub async fn get_files(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<NodeResponse>>, ApiError> {
    // A non-numeric parent filter matches nothing.
    let Some(parent_id) = query.resolved_parent_id() else {
        return Ok(Json(Vec::new()));
    };

    let nodes = state
        .files
        .list_children(auth.user_id, parent_id, query.resolved_page())
        .await?;

    Ok(Json(nodes.into_iter().map(NodeResponse::from).collect()))
}

/// PUT /files/:id/publish - Make a node publicly readable.
pub async fn publish_file(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<NodeResponse>, ApiError> {
    let id = parse_node_id(&id)?;
    let node = state.files.set_visibility(id, auth.user_id, true).await?;

    Ok(Json(NodeResponse::from(node)))
}

/// PUT /files/:id/unpublish - Make a node private again.
pub async fn unpublish_file(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<NodeResponse>, ApiError> {
    let id = parse_node_id(&id)?;
    let node = state.files.set_visibility(id, auth.user_id, false).await?;

    Ok(Json(NodeResponse::from(node)))
}

/// GET /files/:id/data - Fetch a node's content, base64-encoded.
pub async fn get_file_data(
    State(state): State<Arc<AppState>>,
    auth: OptionalAuthUser,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id = parse_node_id(&id)?;
    let (_, data) = state.files.download(id, auth.0).await?;

    Ok(STANDARD.encode(data))
}
