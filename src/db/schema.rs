//! Database schema migrations for filedepot.
//!
//! Each entry is applied in order inside its own transaction; the current
//! version is tracked in the `schema_version` table.

/// Ordered list of schema migrations.
///
/// Note: `files.parent_id` uses the integer `0` as the root sentinel
/// ("no parent; top-level node"). SQLite rowids start at 1, so the sentinel
/// can never collide with a real node id. `users.email` carries a UNIQUE
/// constraint so a lost check-then-insert race cannot create two accounts.
pub const MIGRATIONS: &[&str] = &[
    // v1: users and files
    "CREATE TABLE users (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        email       TEXT NOT NULL UNIQUE,
        password    TEXT NOT NULL,
        created_at  TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE TABLE files (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id    INTEGER NOT NULL REFERENCES users(id),
        name        TEXT NOT NULL,
        node_type   TEXT NOT NULL CHECK (node_type IN ('folder', 'file', 'image')),
        parent_id   INTEGER NOT NULL DEFAULT 0,
        is_public   INTEGER NOT NULL DEFAULT 0,
        content_ref TEXT,
        created_at  TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE INDEX idx_files_owner_parent ON files(owner_id, parent_id);",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_migrations_mention_core_tables() {
        let all = MIGRATIONS.join("\n");
        assert!(all.contains("CREATE TABLE users"));
        assert!(all.contains("CREATE TABLE files"));
    }
}
