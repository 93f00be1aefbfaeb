//! Hierarchical file namespace: metadata, content blobs, and access policy.

mod node;
mod policy;
mod repository;
mod service;
mod storage;

pub use node::{FileNode, NewNode, NodeType};
pub use policy::{can_read, can_write};
pub use repository::NodeRepository;
pub use service::{CreateNode, FileService};
pub use storage::BlobStore;

/// Sentinel parent id meaning "top level, no parent".
///
/// SQLite rowids start at 1, so `0` can never name a real node.
pub const ROOT_PARENT: i64 = 0;

/// Fixed page size for child listings.
pub const PAGE_SIZE: i64 = 20;
