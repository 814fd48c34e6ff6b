//! # Catalog Errors
//!
//! Error types for the catalog module.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by catalog lookups and mutations
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    // ==================
    // Validation Errors
    // ==================

    /// No server with this id in the refined result set
    #[error("Server: {0} is unknown.")]
    UnknownServer(u64),

    /// The id query parameter could not be parsed
    #[error("Server id '{0}' is not a valid integer")]
    MalformedServerId(String),

    /// The qty query parameter could not be parsed
    #[error("Quantity '{0}' is not a valid integer")]
    MalformedQuantity(String),

    /// Category referenced by name does not exist
    #[error("Category '{0}' is unknown")]
    UnknownCategory(String),

    /// Category name already registered
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),

    /// Empty or otherwise unusable name
    #[error("Invalid name: {0}")]
    InvalidName(String),

    // ==================
    // Internal Errors
    // ==================

    /// Store is internally inconsistent or a lock was poisoned
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            CatalogError::UnknownServer(_) => 400,
            CatalogError::MalformedServerId(_) => 400,
            CatalogError::MalformedQuantity(_) => 400,
            CatalogError::UnknownCategory(_) => 400,
            CatalogError::InvalidName(_) => 400,

            // 409 Conflict
            CatalogError::DuplicateCategory(_) => 409,

            // 500 Internal Server Error
            CatalogError::Storage(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_server_message_names_id() {
        let err = CatalogError::UnknownServer(42);
        assert_eq!(err.to_string(), "Server: 42 is unknown.");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(CatalogError::UnknownServer(1).status_code(), 400);
        assert_eq!(
            CatalogError::DuplicateCategory("gaming".to_string()).status_code(),
            409
        );
        assert_eq!(CatalogError::Storage("lock".to_string()).status_code(), 500);
    }
}
