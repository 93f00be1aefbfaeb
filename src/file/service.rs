//! File service: the upload, lookup, listing, visibility, and download
//! flows, combining metadata, blob storage, and access policy.

use tracing::info;

use crate::file::{
    can_read, can_write, BlobStore, FileNode, NewNode, NodeRepository, NodeType, ROOT_PARENT,
};
use crate::{DepotError, Result};

/// Parameters for creating a node.
#[derive(Debug, Clone)]
pub struct CreateNode {
    pub name: String,
    pub node_type: NodeType,
    pub parent_id: i64,
    pub is_public: bool,
    /// Decoded content; required for files and images, rejected for folders.
    pub data: Option<Vec<u8>>,
}

/// High-level file operations.
///
/// Record-scoped operations report authorization failures as `NotFound`,
/// so callers cannot probe for the existence of other users' nodes.
#[derive(Clone)]
pub struct FileService {
    nodes: NodeRepository,
    blobs: BlobStore,
}

impl FileService {
    pub fn new(nodes: NodeRepository, blobs: BlobStore) -> Self {
        Self { nodes, blobs }
    }

    /// Create a folder, file, or image node owned by `owner_id`.
    ///
    /// All validation runs before any store is touched. For content nodes
    /// the blob write precedes the metadata insert; a metadata failure
    /// after a successful blob write leaves an unreferenced blob behind,
    /// never a node pointing at missing content.
    pub async fn create(&self, owner_id: i64, req: CreateNode) -> Result<FileNode> {
        if req.name.is_empty() {
            return Err(DepotError::Validation("Missing name".to_string()));
        }
        if req.node_type.has_content() && req.data.is_none() {
            return Err(DepotError::Validation("Missing data".to_string()));
        }

        if req.parent_id != ROOT_PARENT {
            let parent = self
                .nodes
                .get_by_id(req.parent_id)
                .await?
                .ok_or_else(|| DepotError::InvalidParent("Parent not found".to_string()))?;

            if !parent.is_folder() {
                return Err(DepotError::InvalidParent(
                    "Parent is not a folder".to_string(),
                ));
            }
        }

        let mut new_node = NewNode::new(owner_id, req.name, req.node_type)
            .parent(req.parent_id)
            .public(req.is_public);

        if let Some(data) = &req.data {
            let content_ref = self.blobs.store(data).await?;
            new_node = new_node.content_ref(content_ref);
        }

        let node = self.nodes.insert(new_node).await?;
        info!(
            "User {} created {} node {} under {}",
            owner_id, node.node_type, node.id, node.parent_id
        );

        Ok(node)
    }

    /// Fetch a node's metadata, subject to read policy.
    pub async fn get_node(&self, id: i64, viewer: Option<i64>) -> Result<FileNode> {
        let node = self
            .nodes
            .get_by_id(id)
            .await?
            .ok_or_else(|| DepotError::NotFound("file".to_string()))?;

        if !can_read(&node, viewer) {
            return Err(DepotError::NotFound("file".to_string()));
        }

        Ok(node)
    }

    /// List one page of an owner's children of `parent_id`, newest first.
    pub async fn list_children(
        &self,
        owner_id: i64,
        parent_id: i64,
        page: i64,
    ) -> Result<Vec<FileNode>> {
        self.nodes.list_children(owner_id, parent_id, page).await
    }

    /// Flip a node's visibility flag. Owner-only.
    pub async fn set_visibility(
        &self,
        id: i64,
        owner_id: i64,
        is_public: bool,
    ) -> Result<FileNode> {
        let node = self
            .nodes
            .get_by_id(id)
            .await?
            .ok_or_else(|| DepotError::NotFound("file".to_string()))?;

        if !can_write(&node, owner_id) {
            return Err(DepotError::NotFound("file".to_string()));
        }

        self.nodes.set_public(id, is_public).await
    }

    /// Fetch a node's content, subject to read policy.
    ///
    /// Folders have no content and are rejected with a validation error;
    /// a content node whose blob has gone missing reads as not found.
    pub async fn download(&self, id: i64, viewer: Option<i64>) -> Result<(FileNode, Vec<u8>)> {
        let node = self.get_node(id, viewer).await?;

        if node.is_folder() {
            return Err(DepotError::Validation(
                "A folder doesn't have content".to_string(),
            ));
        }

        let content_ref = node
            .content_ref
            .as_deref()
            .ok_or_else(|| DepotError::NotFound("file".to_string()))?;

        let data = self.blobs.load(content_ref).await?;
        Ok((node, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup() -> (Database, tempfile::TempDir, FileService, i64) {
        let db = Database::open_in_memory().await.unwrap();
        let dir = tempfile::TempDir::new().unwrap();

        let owner = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
            .bind("owner@example.com")
            .bind("digest")
            .execute(db.pool())
            .await
            .unwrap()
            .last_insert_rowid();

        let service = FileService::new(
            NodeRepository::new(db.pool().clone()),
            BlobStore::new(dir.path()),
        );
        (db, dir, service, owner)
    }

    fn folder_req(name: &str) -> CreateNode {
        CreateNode {
            name: name.to_string(),
            node_type: NodeType::Folder,
            parent_id: ROOT_PARENT,
            is_public: false,
            data: None,
        }
    }

    fn file_req(name: &str, parent_id: i64, data: &[u8]) -> CreateNode {
        CreateNode {
            name: name.to_string(),
            node_type: NodeType::File,
            parent_id,
            is_public: false,
            data: Some(data.to_vec()),
        }
    }

    #[tokio::test]
    async fn test_create_folder() {
        let (_db, _dir, service, owner) = setup().await;

        let node = service.create(owner, folder_req("docs")).await.unwrap();
        assert_eq!(node.node_type, NodeType::Folder);
        assert!(node.content_ref.is_none());
    }

    #[tokio::test]
    async fn test_create_file_stores_blob() {
        let (_db, _dir, service, owner) = setup().await;

        let node = service
            .create(owner, file_req("hello.txt", ROOT_PARENT, b"Hello"))
            .await
            .unwrap();
        assert!(node.content_ref.is_some());

        let (_, data) = service.download(node.id, Some(owner)).await.unwrap();
        assert_eq!(data, b"Hello");
    }

    #[tokio::test]
    async fn test_create_missing_name() {
        let (_db, _dir, service, owner) = setup().await;

        let err = service.create(owner, folder_req("")).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing name");
    }

    #[tokio::test]
    async fn test_create_file_missing_data() {
        let (_db, _dir, service, owner) = setup().await;

        let mut req = file_req("hello.txt", ROOT_PARENT, b"");
        req.data = None;
        let err = service.create(owner, req).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing data");
    }

    #[tokio::test]
    async fn test_create_parent_not_found() {
        let (_db, _dir, service, owner) = setup().await;

        let err = service
            .create(owner, file_req("hello.txt", 9999, b"Hello"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Parent not found");
    }

    #[tokio::test]
    async fn test_create_parent_not_a_folder() {
        let (_db, _dir, service, owner) = setup().await;

        let file = service
            .create(owner, file_req("hello.txt", ROOT_PARENT, b"Hello"))
            .await
            .unwrap();

        let err = service
            .create(owner, file_req("nested.txt", file.id, b"x"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Parent is not a folder");
    }

    #[tokio::test]
    async fn test_get_node_policy() {
        let (_db, _dir, service, owner) = setup().await;

        let node = service
            .create(owner, file_req("private.txt", ROOT_PARENT, b"x"))
            .await
            .unwrap();

        assert!(service.get_node(node.id, Some(owner)).await.is_ok());

        let err = service.get_node(node.id, None).await.unwrap_err();
        assert!(matches!(err, DepotError::NotFound(_)));

        let err = service.get_node(node.id, Some(owner + 1)).await.unwrap_err();
        assert!(matches!(err, DepotError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_publish_and_unpublish() {
        let (_db, _dir, service, owner) = setup().await;

        let node = service
            .create(owner, file_req("shared.txt", ROOT_PARENT, b"x"))
            .await
            .unwrap();

        let node = service.set_visibility(node.id, owner, true).await.unwrap();
        assert!(node.is_public);
        assert!(service.get_node(node.id, None).await.is_ok());

        let node = service.set_visibility(node.id, owner, false).await.unwrap();
        assert!(!node.is_public);
        assert!(service.get_node(node.id, None).await.is_err());
    }

    #[tokio::test]
    async fn test_set_visibility_owner_only() {
        let (_db, _dir, service, owner) = setup().await;

        let node = service
            .create(owner, file_req("mine.txt", ROOT_PARENT, b"x"))
            .await
            .unwrap();

        let err = service
            .set_visibility(node.id, owner + 1, true)
            .await
            .unwrap_err();
        assert!(matches!(err, DepotError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_download_folder_rejected() {
        let (_db, _dir, service, owner) = setup().await;

        let folder = service.create(owner, folder_req("docs")).await.unwrap();
        let err = service.download(folder.id, Some(owner)).await.unwrap_err();
        assert_eq!(err.to_string(), "A folder doesn't have content");
    }

    #[tokio::test]
    async fn test_download_respects_policy() {
        let (_db, _dir, service, owner) = setup().await;

        let node = service
            .create(owner, file_req("private.txt", ROOT_PARENT, b"secret"))
            .await
            .unwrap();

        let err = service.download(node.id, None).await.unwrap_err();
        assert!(matches!(err, DepotError::NotFound(_)));

        service.set_visibility(node.id, owner, true).await.unwrap();
        let (_, data) = service.download(node.id, None).await.unwrap();
        assert_eq!(data, b"secret");
    }

    #[tokio::test]
    async fn test_download_missing_node() {
        let (_db, _dir, service, owner) = setup().await;

        let err = service.download(9999, Some(owner)).await.unwrap_err();
        assert!(matches!(err, DepotError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_nested_file_in_folder() {
        let (_db, _dir, service, owner) = setup().await;

        let folder = service.create(owner, folder_req("docs")).await.unwrap();
        let file = service
            .create(owner, file_req("report.txt", folder.id, b"body"))
            .await
            .unwrap();

        assert_eq!(file.parent_id, folder.id);

        let children = service.list_children(owner, folder.id, 0).await.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id, file.id);
    }
}
