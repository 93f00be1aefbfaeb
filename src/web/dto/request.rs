//! Request DTOs.

use serde::Deserialize;
use serde_json::Value;

use crate::file::ROOT_PARENT;

/// Request body for POST /users.
///
/// Fields are optional so that an absent field surfaces as a domain
/// validation error instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Request body for POST /files.
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// Node kind: "folder", "file", or "image".
    #[serde(rename = "type", default)]
    pub node_type: Option<String>,
    /// Parent node id. Accepts a JSON number or a numeric string;
    /// absent means top level.
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<Value>,
    #[serde(rename = "isPublic", default)]
    pub is_public: bool,
    /// Base64-encoded content; required for files and images.
    #[serde(default)]
    pub data: Option<String>,
}

impl UploadRequest {
    /// Resolve the parent id, accepting both `"0"` and `0` on the wire.
    ///
    /// Returns `None` when a value is present but not a valid integer;
    /// such a value can never name an existing node.
    pub fn resolved_parent_id(&self) -> Option<i64> {
        match &self.parent_id {
            None => Some(ROOT_PARENT),
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.parse().ok(),
            Some(_) => None,
        }
    }
}

/// Query parameters for GET /files.
///
/// Both parameters arrive as strings; malformed values are tolerated
/// rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl ListQuery {
    /// Resolve the parent filter. Absent means top level; a non-numeric
    /// value matches nothing.
    pub fn resolved_parent_id(&self) -> Option<i64> {
        match &self.parent_id {
            None => Some(ROOT_PARENT),
            Some(s) => s.parse().ok(),
        }
    }

    /// Resolve the page number. Absent, non-numeric, or negative values
    /// fall back to the first page.
    pub fn resolved_page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.parse::<i64>().ok())
            .filter(|p| *p >= 0)
            .unwrap_or(0)
    }
}
