//! Store error types

use thiserror::Error;

use super::record::RecordId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures a store reports to its caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested id
    #[error("Record not found: {0}")]
    NotFound(RecordId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_id() {
        assert_eq!(StoreError::NotFound(7).to_string(), "Record not found: 7");
    }
}
