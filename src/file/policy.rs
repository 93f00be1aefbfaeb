//! Access control decisions for file nodes.

use crate::file::FileNode;

/// Whether a requester may read a node.
///
/// Public nodes are readable by anyone, anonymous callers included.
/// Private nodes are readable only by their owner.
pub fn can_read(node: &FileNode, requester: Option<i64>) -> bool {
    node.is_public || requester == Some(node.owner_id)
}

/// Whether a requester may modify a node. Owner-only; visibility has no
/// bearing on write access.
pub fn can_write(node: &FileNode, requester: i64) -> bool {
    node.owner_id == requester
}
