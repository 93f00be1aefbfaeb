//! Error types for filedepot.

use thiserror::Error;

/// Common error type for filedepot.
#[derive(Error, Debug)]
pub enum DepotError {
    /// Missing, invalid, or expired session token.
    #[error("unauthorized")]
    Unauthenticated,

    /// Validation error for user input (missing/malformed field).
    #[error("{0}")]
    Validation(String),

    /// Parent node missing or not a folder.
    #[error("{0}")]
    InvalidParent(String),

    /// Duplicate resource (e.g. an already registered email).
    #[error("{0}")]
    Conflict(String),

    /// Resource not found, or present but not visible to the caller.
    ///
    /// Authorization failures on record-scoped operations are reported
    /// through this variant so a caller cannot distinguish "no such file"
    /// from "file exists but is not yours".
    #[error("{0} not found")]
    NotFound(String),

    /// Blob store fault (disk I/O other than a missing blob).
    #[error("storage error: {0}")]
    Storage(String),

    /// Document store error.
    ///
    /// This is a generic database error that wraps errors from the sqlx
    /// driver; sqlx errors are converted automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for DepotError {
    fn from(e: sqlx::Error) -> Self {
        DepotError::Database(e.to_string())
    }
}

/// Result type alias for filedepot operations.
pub type Result<T> = std::result::Result<T, DepotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_display() {
        assert_eq!(DepotError::Unauthenticated.to_string(), "unauthorized");
    }

    #[test]
    fn test_validation_error_display() {
        let err = DepotError::Validation("Missing name".to_string());
        assert_eq!(err.to_string(), "Missing name");
    }

    #[test]
    fn test_invalid_parent_display() {
        let err = DepotError::InvalidParent("Parent is not a folder".to_string());
        assert_eq!(err.to_string(), "Parent is not a folder");
    }

    #[test]
    fn test_not_found_display() {
        let err = DepotError::NotFound("file".to_string());
        assert_eq!(err.to_string(), "file not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DepotError = io_err.into();
        assert!(matches!(err, DepotError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(DepotError::Conflict("Already exist".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
