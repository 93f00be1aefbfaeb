//! File node records and types.

use serde::Serialize;
use sqlx::FromRow;

use crate::file::ROOT_PARENT;

/// Kind of a file node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Folder,
    File,
    Image,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Folder => "folder",
            NodeType::File => "file",
            NodeType::Image => "image",
        }
    }

    /// Whether nodes of this type carry blob content.
    pub fn has_content(&self) -> bool {
        !matches!(self, NodeType::Folder)
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for NodeType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "folder" => Ok(NodeType::Folder),
            "file" => Ok(NodeType::File),
            "image" => Ok(NodeType::Image),
            other => Err(format!("unknown node type: {other}")),
        }
    }
}

/// A node in the file namespace.
#[derive(Debug, Clone, FromRow)]
pub struct FileNode {
    /// Unique node id (SQLite rowid).
    pub id: i64,
    /// Owning user id.
    pub owner_id: i64,
    /// Display name.
    pub name: String,
    /// Node kind.
    #[sqlx(try_from = "String")]
    pub node_type: NodeType,
    /// Parent node id, or [`ROOT_PARENT`] for top-level nodes.
    pub parent_id: i64,
    /// Whether anonymous callers may read this node.
    pub is_public: bool,
    /// Opaque blob reference; `None` for folders.
    pub content_ref: Option<String>,
    /// Creation timestamp (UTC, `datetime('now')` format).
    pub created_at: String,
}

impl FileNode {
    pub fn is_folder(&self) -> bool {
        self.node_type == NodeType::Folder
    }
}

/// Data for inserting a new node.
#[derive(Debug, Clone)]
pub struct NewNode {
    pub owner_id: i64,
    pub name: String,
    pub node_type: NodeType,
    pub parent_id: i64,
    pub is_public: bool,
    pub content_ref: Option<String>,
}

impl NewNode {
    pub fn new(owner_id: i64, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            owner_id,
            name: name.into(),
            node_type,
            parent_id: ROOT_PARENT,
            is_public: false,
            content_ref: None,
        }
    }

    pub fn parent(mut self, parent_id: i64) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn content_ref(mut self, content_ref: impl Into<String>) -> Self {
        self.content_ref = Some(content_ref.into());
        self
    }
}
