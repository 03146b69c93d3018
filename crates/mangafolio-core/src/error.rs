//! Error types for Mangafolio

use thiserror::Error;

/// Main error type for Mangafolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// No project record carries the requested id
    #[error("Project not found: {0}")]
    ProjectNotFound(u32),

    /// Route parameter could not be interpreted
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Catalog data was rejected while loading
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Contact form is missing a required field or has a bad value
    #[error("Invalid contact form: {0}")]
    InvalidContactForm(String),

    /// Audio, clipboard or download collaborator failed
    #[error("Peripheral failure: {0}")]
    Peripheral(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortfolioError {
    /// Whether the error is one the UI recovers from without showing it.
    ///
    /// Missing projects redirect to the listing and peripheral failures are
    /// swallowed; everything else is at least worth a log line.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PortfolioError::ProjectNotFound(_)
                | PortfolioError::InvalidRoute(_)
                | PortfolioError::Peripheral(_)
        )
    }
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::ProjectNotFound(7);
        assert_eq!(format!("{}", err), "Project not found: 7");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(PortfolioError::ProjectNotFound(0).is_recoverable());
        assert!(PortfolioError::Peripheral("audio".into()).is_recoverable());
        assert!(!PortfolioError::Serialization("bad".into()).is_recoverable());
    }
}
