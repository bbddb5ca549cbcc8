//! # Codec
//!
//! Bidirectional mapping between records (or envelopes) and JSON bytes.
//!
//! Field names, omitted fields and declaration order all come from the
//! serde derive on the value's type; this module only fixes the wire
//! conventions:
//!
//! - output is one JSON value with no trailing newline
//! - unknown input fields are ignored
//! - malformed input is classified into a [`CodecError`]

pub mod envelope;
pub mod errors;

pub use envelope::{ErrorEnvelope, MessageEnvelope};
pub use errors::{CodecError, CodecResult};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Media type set on every JSON response
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Serialize a value to JSON bytes using its wire field names
pub fn encode<T: Serialize + ?Sized>(value: &T) -> CodecResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|err| CodecError::Encode(err.to_string()))
}

/// Parse JSON bytes into a value of shape `T`
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> CodecResult<T> {
    serde_json::from_slice(bytes).map_err(CodecError::from)
}
