//! The capability trait persisted records implement.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A persisted unit of state for one `(process, kind)` key.
///
/// The store is oblivious to a record's shape. It only requires the
/// record to merge incoming contributions into itself and to clear its
/// tracked state once the work it checkpoints is finished.
pub trait Record: Debug + Serialize + DeserializeOwned {
  /// Stable type tag. Becomes a file name segment, keeping different
  /// record kinds of the same process on different paths.
  const KIND: &'static str;

  /// Combine new information into this record in place.
  ///
  /// Repeated merges must converge to a correct accumulated state.
  /// Merges are not assumed idempotent: a duplicated contribution may
  /// double-count unless the record type itself deduplicates.
  fn merge(&mut self, incoming: Self);

  /// Clear or finalize the tracked state once the work is finished.
  ///
  /// [`CheckpointStore::remove_if_done`] persists the result of this
  /// call in place of the old record; it never unlinks the file.
  ///
  /// [`CheckpointStore::remove_if_done`]: crate::CheckpointStore::remove_if_done
  fn mark_done(&mut self);
}
