//! Error types for waymark-store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use waymark_platform::PlatformError;

use crate::codec::CodecError;

/// Errors that can occur when operating on checkpoint records.
///
/// Variants carry the resolved path so callers can log or retry with
/// full context. The store itself never retries.
#[derive(Debug, Error)]
pub enum StoreError {
  /// Failed to create the store directory.
  #[error("failed to create store directory {path}: {source}")]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Failed to read a record file.
  #[error("failed to read record {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Failed to write a record file.
  #[error("failed to write record {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// A record file exists but does not decode to the requested type.
  ///
  /// [`CheckpointStore::create_or_update`] leaves the file untouched
  /// when this happens.
  ///
  /// [`CheckpointStore::create_or_update`]: crate::CheckpointStore::create_or_update
  #[error("failed to decode record {path}: {source}")]
  Decode {
    path: PathBuf,
    #[source]
    source: CodecError,
  },

  /// A record could not be encoded for writing.
  #[error("failed to encode record {path}: {source}")]
  Encode {
    path: PathBuf,
    #[source]
    source: CodecError,
  },

  /// The platform state directory could not be resolved.
  #[error("failed to resolve state directory: {0}")]
  StateDir(#[source] PlatformError),
}
