//! Platform path resolution for waymark.
//!
//! This crate answers one question for the store: where do checkpoint
//! files live on this machine? The store treats it as an opaque
//! collaborator that returns a stable, writable directory for the
//! lifetime of the process.

mod error;
mod paths;

pub use error::PlatformError;
pub use paths::{STATE_DIR_ENV, home_dir, state_dir};
