//! Codec error types

use serde_json::error::Category;
use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Why a value could not be encoded or decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input is not syntactically valid JSON
    #[error("malformed JSON at line {line} column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Valid JSON whose shape or types do not match the target
    #[error("unexpected value at line {line} column {column}: {message}")]
    Data {
        line: usize,
        column: usize,
        message: String,
    },

    /// Input ended before a complete value was read
    #[error("unexpected end of input")]
    Eof { line: usize, column: usize },

    /// Failure in the underlying reader
    #[error("{0}")]
    Io(String),

    /// A value refused to serialize; carries the raw error text
    #[error("{0}")]
    Encode(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());
        match err.classify() {
            Category::Syntax => CodecError::Syntax {
                line,
                column,
                message: strip_position(&err),
            },
            Category::Data => CodecError::Data {
                line,
                column,
                message: strip_position(&err),
            },
            Category::Eof => CodecError::Eof { line, column },
            Category::Io => CodecError::Io(err.to_string()),
        }
    }
}

// serde_json appends " at line L column C" to its Display output; the
// position is carried in our own fields instead.
fn strip_position(err: &serde_json::Error) -> String {
    let text = err.to_string();
    match text.rfind(" at line ") {
        Some(idx) => text[..idx].to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_keeps_position_once() {
        let err: CodecError = serde_json::from_str::<i64>("\"x\"").unwrap_err().into();
        let text = err.to_string();
        assert!(text.starts_with("unexpected value at line 1 column"));
        assert_eq!(text.matches("line").count(), 1);
    }

    #[test]
    fn test_eof_classification() {
        let err: CodecError = serde_json::from_str::<i64>("").unwrap_err().into();
        assert_eq!(err, CodecError::Eof { line: 1, column: 0 });
    }
}
