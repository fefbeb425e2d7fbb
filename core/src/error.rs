//! Error taxonomy for support request operations.

use crate::model::RequestId;
use thiserror::Error;

/// Result type alias for support request operations.
pub type Result<T> = std::result::Result<T, RequestError>;

/// Failure modes for support request lifecycle operations.
///
/// `NotFound` is raised only by commands that require the target to exist
/// (update, delete); lookups report absence as `Ok(None)` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No request exists under the given identifier.
    #[error("Request not found with id {0}")]
    NotFound(RequestId),

    /// Underlying store operation failed.
    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_carries_the_id() {
        let err = RequestError::NotFound(RequestId::new(99));
        assert_eq!(err.to_string(), "Request not found with id 99");
    }

    #[test]
    fn database_message_carries_the_cause() {
        let err = RequestError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "Database error: connection refused");
    }
}
