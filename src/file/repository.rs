//! File metadata repository backed by SQLite.

use sqlx::SqlitePool;
use tracing::debug;

use crate::file::{FileNode, NewNode, PAGE_SIZE};
use crate::{DepotError, Result};

const NODE_COLUMNS: &str =
    "id, owner_id, name, node_type, parent_id, is_public, content_ref, created_at";

/// Repository for file node metadata.
#[derive(Clone)]
pub struct NodeRepository {
    pool: SqlitePool,
}

impl NodeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a node and return it with its assigned id.
    pub async fn insert(&self, node: NewNode) -> Result<FileNode> {
        let insert = sqlx::query(
            "INSERT INTO files (owner_id, name, node_type, parent_id, is_public, content_ref)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(node.owner_id)
        .bind(&node.name)
        .bind(node.node_type.as_str())
        .bind(node.parent_id)
        .bind(node.is_public)
        .bind(&node.content_ref)
        .execute(&self.pool)
        .await?;

        let id = insert.last_insert_rowid();
        debug!("Inserted {} node {} ({})", node.node_type, id, node.name);

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DepotError::Database("inserted node vanished".to_string()))
    }

    /// Look up a node by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<FileNode>> {
        let node = sqlx::query_as::<_, FileNode>(&format!(
            "SELECT {NODE_COLUMNS} FROM files WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(node)
    }

    /// List one page of an owner's children of `parent_id`, newest first.
    pub async fn list_children(
        &self,
        owner_id: i64,
        parent_id: i64,
        page: i64,
    ) -> Result<Vec<FileNode>> {
        let nodes = sqlx::query_as::<_, FileNode>(&format!(
            "SELECT {NODE_COLUMNS} FROM files
             WHERE owner_id = ? AND parent_id = ?
             ORDER BY id DESC
             LIMIT ? OFFSET ?"
        ))
        .bind(owner_id)
        .bind(parent_id)
        .bind(PAGE_SIZE)
        .bind(page * PAGE_SIZE)
        .fetch_all(&self.pool)
        .await?;

        Ok(nodes)
    }

    /// Set the visibility flag on a node and return the updated record.
    pub async fn set_public(&self, id: i64, is_public: bool) -> Result<FileNode> {
        sqlx::query("UPDATE files SET is_public = ? WHERE id = ?")
            .bind(is_public)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DepotError::NotFound("file".to_string()))
    }
}
