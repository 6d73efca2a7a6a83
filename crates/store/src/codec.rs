//! JSON codec boundary between in-memory records and on-disk bytes.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur at the codec boundary.
#[derive(Debug, Error)]
pub enum CodecError {
  /// Bytes are present but do not parse into the requested type.
  #[error("failed to parse record JSON: {0}")]
  Parse(#[source] serde_json::Error),

  /// A record could not be serialized.
  #[error("failed to serialize record: {0}")]
  Serialize(#[source] serde_json::Error),
}

/// Encode a record as pretty-printed JSON.
pub fn encode<T: Serialize>(value: &T) -> Result<String, CodecError> {
  serde_json::to_string_pretty(value).map_err(CodecError::Serialize)
}

/// Decode a record from JSON text.
pub fn decode<T: DeserializeOwned>(content: &str) -> Result<T, CodecError> {
  serde_json::from_str(content).map_err(CodecError::Parse)
}
