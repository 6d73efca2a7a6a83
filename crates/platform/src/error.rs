//! Error types for waymark-platform

use thiserror::Error;

/// Errors that can occur while resolving platform directories
#[derive(Debug, Error)]
pub enum PlatformError {
  #[error("Failed to determine home directory")]
  NoHomeDirectory,

  #[error("Required environment variable {0} is not set")]
  MissingEnv(&'static str),
}
