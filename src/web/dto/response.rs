//! Response DTOs.

use serde::Serialize;

use crate::db::User;
use crate::file::{FileNode, NodeType};

/// Response body for GET /connect.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Public view of a user account.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Public view of a file node.
///
/// The content reference is deliberately absent; storage locations never
/// leave the server.
#[derive(Debug, Serialize)]
pub struct NodeResponse {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(rename = "isPublic")]
    pub is_public: bool,
    #[serde(rename = "parentId")]
    pub parent_id: i64,
}

impl From<FileNode> for NodeResponse {
    fn from(node: FileNode) -> Self {
        Self {
            id: node.id,
            user_id: node.owner_id,
            name: node.name,
            node_type: node.node_type,
            is_public: node.is_public,
            parent_id: node.parent_id,
        }
    }
}

/// Response body for GET /status.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub db: bool,
    pub sessions: bool,
}

/// Response body for GET /stats.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub users: i64,
    pub files: i64,
}
