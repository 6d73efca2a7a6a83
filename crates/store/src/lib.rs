//! waymark-store: durable per-process checkpoint records.
//!
//! Long-running workers persist small progress records as JSON files
//! and reload them after a restart instead of starting over. This
//! crate owns the load-merge-save lifecycle:
//! - `CheckpointStore`: create-if-absent, merge-update, finalize, load
//! - `Record`: the capability trait persisted types implement
//! - `codec`: the JSON boundary between records and on-disk bytes

pub mod codec;
pub mod error;
pub mod record;
pub mod store;

pub use error::StoreError;
pub use record::Record;
pub use store::CheckpointStore;
