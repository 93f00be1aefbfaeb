//! Content blob store.
//!
//! Blobs live on the local filesystem under a configurable root, named by
//! a fresh UUID and sharded into subdirectories by the first two hex
//! characters to keep directory fanout bounded.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::{DepotError, Result};

/// Filesystem-backed blob store.
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory blobs are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, content_ref: &str) -> PathBuf {
        let shard = &content_ref[..content_ref.len().min(2)];
        self.root.join(shard).join(content_ref)
    }

    /// Write a blob and return its opaque content reference.
    ///
    /// Every call allocates a fresh reference; blobs are never overwritten
    /// in place.
    pub async fn store(&self, data: &[u8]) -> Result<String> {
        let content_ref = Uuid::new_v4().to_string();
        let path = self.path_for(&content_ref);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, data).await?;

        debug!("Stored {} byte blob as {}", data.len(), content_ref);
        Ok(content_ref)
    }

    /// Read a blob back by reference.
    ///
    /// A reference with no backing file maps to `NotFound`; other I/O
    /// failures propagate as-is.
    pub async fn load(&self, content_ref: &str) -> Result<Vec<u8>> {
        let path = self.path_for(content_ref);

        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(DepotError::NotFound("file".to_string()))
            }
            Err(e) => Err(DepotError::Storage(format!("read {content_ref}: {e}"))),
        }
    }
}
