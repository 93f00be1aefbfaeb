//! Password digesting.

use sha1::{Digest, Sha1};

/// Compute the stored digest for a password.
///
/// Deterministic and unsalted: the same password always produces the same
/// hex string, which is what the credential check compares against. This
/// matches the storage format of existing deployments and must not change
/// without a data migration.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
