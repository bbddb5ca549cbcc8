//! # REST API Errors
//!
//! Every failure a request can hit, and how it maps to a status code and
//! the `{"error": ...}` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::codec::{CodecError, ErrorEnvelope};
use crate::store::StoreError;

use super::reply::Reply;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestError {
    /// Path id is not an integer
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Request body does not decode to the record shape
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] CodecError),

    /// No record with the requested id
    #[error("{0}")]
    NotFound(#[from] StoreError),

    /// Unsupported verb on a known path
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No route matches the path
    #[error("Not found")]
    RouteNotFound,
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidId(_) | RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound(_) | RestError::RouteNotFound => StatusCode::NOT_FOUND,
            RestError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::new(self.to_string())
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        Reply::new(self.status_code(), self.envelope()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::InvalidId("abc".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::InvalidBody(CodecError::Io("x".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::from(StoreError::NotFound(3)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(RestError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_envelope_messages() {
        assert_eq!(
            RestError::InvalidId("abc".to_string()).envelope().error,
            "Invalid id: abc"
        );
        assert_eq!(
            RestError::from(StoreError::NotFound(3)).envelope().error,
            "Record not found: 3"
        );
        assert_eq!(RestError::MethodNotAllowed.envelope().error, "Method not allowed");
    }
}
