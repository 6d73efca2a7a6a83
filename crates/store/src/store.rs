//! Durable checkpoint store: the load-merge-save lifecycle.
//!
//! One record per `(process, kind)` key, stored as a JSON file:
//!
//! ```text
//! <base_dir>/
//! └── <process>.<KIND>.json
//! ```
//!
//! Every operation holds a per-key mutex across its whole
//! read-decide-write sequence, so concurrent callers never interleave
//! on the same logical record. Writes replace the file atomically via
//! a temp file in the same directory.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::codec;
use crate::error::StoreError;
use crate::record::Record;

/// Persists one record per `(process, kind)` key under a base directory.
///
/// The store is an explicit value: construct it with the directory the
/// records live in (or [`CheckpointStore::default_store`] for the
/// platform default) and hand it to whoever needs it. Clones share the
/// per-key locks, so a clone given to a worker thread still serializes
/// against the original.
#[derive(Debug, Clone)]
pub struct CheckpointStore {
  /// Directory holding the record files.
  base_dir: PathBuf,
  /// Per-key mutexes, created on demand.
  locks: Arc<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>>,
}

impl CheckpointStore {
  /// Create a store over the given directory.
  ///
  /// The directory itself is created lazily on first write.
  pub fn new(base_dir: PathBuf) -> Self {
    Self {
      base_dir,
      locks: Arc::new(Mutex::new(HashMap::new())),
    }
  }

  /// Create a store at the platform state directory.
  ///
  /// Uses `~/.local/state/waymark` on Unix (honoring `XDG_STATE_HOME`)
  /// and `%LOCALAPPDATA%\waymark` on Windows; the `WAYMARK_STATE_DIR`
  /// environment variable overrides both.
  pub fn default_store() -> Result<Self, StoreError> {
    let dir = waymark_platform::state_dir().map_err(StoreError::StateDir)?;
    Ok(Self::new(dir))
  }

  /// Get the base directory of this store.
  pub fn base_dir(&self) -> &Path {
    &self.base_dir
  }

  /// Get the path the record of kind `R` for `process` resolves to.
  ///
  /// The kind segment keeps different record kinds of one process on
  /// different paths; the same key always resolves to the same path.
  pub fn record_path<R: Record>(&self, process: &str) -> PathBuf {
    self.base_dir.join(format!("{}.{}.json", process, R::KIND))
  }

  /// Check whether a record is persisted for the given key.
  pub fn exists<R: Record>(&self, process: &str) -> bool {
    self.record_path::<R>(process).exists()
  }

  /// Merge a contribution into the record for `process`, creating the
  /// record on first use.
  ///
  /// When no file exists yet, `default_record` produces the initial
  /// state and the contribution is NOT merged into it: the first
  /// observation creates the baseline, and merging starts with the
  /// next call. When a file exists, it is decoded and
  /// `record.merge(contribution)` is applied.
  ///
  /// Either way the resulting record replaces the file atomically. A
  /// file that fails to decode aborts the update before anything is
  /// written, leaving the persisted state untouched.
  pub fn create_or_update<R, F>(&self, process: &str, contribution: R, default_record: F) -> Result<(), StoreError>
  where
    R: Record,
    F: FnOnce() -> R,
  {
    let path = self.record_path::<R>(process);
    let lock = self.key_lock(&path);
    let _guard = lock.lock().unwrap();

    let record = if !path.exists() {
      let record = default_record();
      info!(
        process,
        kind = R::KIND,
        path = %path.display(),
        "no checkpoint yet, creating initial record"
      );
      debug!(record = ?record, "initial record");
      record
    } else {
      let mut record: R = self.read_record(&path)?;
      record.merge(contribution);
      info!(
        process,
        kind = R::KIND,
        path = %path.display(),
        "merged contribution into checkpoint"
      );
      debug!(record = ?record, "merged record");
      record
    };

    self.write_record(&path, &record)
  }

  /// Finalize the record for `process`: load it, clear its tracked
  /// state via [`Record::mark_done`], and persist the result.
  ///
  /// The file is rewritten with the done state, never unlinked; a
  /// subsequent [`load`](Self::load) returns the done-state record. A
  /// missing file is a no-op. Decode and write failures are
  /// propagated: silently finalizing unreadable state would corrupt
  /// the checkpoint.
  pub fn remove_if_done<R: Record>(&self, process: &str) -> Result<(), StoreError> {
    let path = self.record_path::<R>(process);
    let lock = self.key_lock(&path);
    let _guard = lock.lock().unwrap();

    if !path.exists() {
      info!(
        process,
        kind = R::KIND,
        path = %path.display(),
        "no checkpoint file, nothing to finalize"
      );
      return Ok(());
    }

    let mut record: R = self.read_record(&path)?;
    record.mark_done();
    info!(
      process,
      kind = R::KIND,
      path = %path.display(),
      "work finished, clearing checkpoint data"
    );

    self.write_record(&path, &record)
  }

  /// Load the record for `process`, or `None` when no file exists.
  ///
  /// Pure read: never creates or mutates anything. A file that fails
  /// to decode is an error, since a read must not mask corruption.
  pub fn load<R: Record>(&self, process: &str) -> Result<Option<R>, StoreError> {
    let path = self.record_path::<R>(process);
    let lock = self.key_lock(&path);
    let _guard = lock.lock().unwrap();

    let content = match fs::read_to_string(&path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        info!(process, kind = R::KIND, path = %path.display(), "no checkpoint file");
        return Ok(None);
      }
      Err(e) => return Err(StoreError::Read { path, source: e }),
    };

    let record: R = codec::decode(&content).map_err(|e| StoreError::Decode {
      path: path.clone(),
      source: e,
    })?;
    debug!(record = ?record, "loaded checkpoint");

    Ok(Some(record))
  }

  /// Get the mutex guarding the given record file, creating it on
  /// first use.
  fn key_lock(&self, path: &Path) -> Arc<Mutex<()>> {
    let mut locks = self.locks.lock().unwrap();
    locks.entry(path.to_path_buf()).or_default().clone()
  }

  /// Read and decode the record at `path`.
  ///
  /// The caller has already seen the file exist; a file that vanished
  /// in between surfaces as [`StoreError::Read`].
  fn read_record<R: Record>(&self, path: &Path) -> Result<R, StoreError> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;

    codec::decode(&content).map_err(|e| StoreError::Decode {
      path: path.to_path_buf(),
      source: e,
    })
  }

  /// Encode `record` and atomically replace the file at `path`.
  ///
  /// Writes to a temp file in the same directory, then renames it over
  /// the target, so a crash mid-write never leaves a truncated file
  /// that parses as valid.
  fn write_record<R: Record>(&self, path: &Path, record: &R) -> Result<(), StoreError> {
    fs::create_dir_all(&self.base_dir).map_err(|e| StoreError::CreateDir {
      path: self.base_dir.clone(),
      source: e,
    })?;

    let content = codec::encode(record).map_err(|e| StoreError::Encode {
      path: path.to_path_buf(),
      source: e,
    })?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &content).map_err(|e| StoreError::Write {
      path: temp_path.clone(),
      source: e,
    })?;
    fs::rename(&temp_path, path).map_err(|e| StoreError::Write {
      path: path.to_path_buf(),
      source: e,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "checkpoint written");
    Ok(())
  }
}
