use super::StoreError;
use crate::utils::paths::{ensure_directories_exist, get_values_path};
use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// Durable ordered list of saved text values, backed by a single JSON
/// record (an array of strings) on disk.
///
/// Every mutation reads the latest persisted state, rewrites the whole
/// record, and returns the authoritative post-mutation list, so callers
/// never need a separate reload. The internal lock serializes
/// read-modify-write cycles; two back-to-back mutations cannot overwrite
/// each other with stale data.
pub struct ValueStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ValueStore {
    /// Store backed by the default on-device record (`~/.clip-tui/`).
    pub fn open_default() -> Result<Self> {
        ensure_directories_exist()?;
        Ok(Self::new(get_values_path()?))
    }

    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read the full saved list. A missing record is an empty list; a
    /// record that does not parse as a list of strings is
    /// [`StoreError::Corrupt`], which callers should treat as non-fatal
    /// (report it and continue with an empty list).
    pub fn load(&self) -> Result<Vec<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read_record()
    }

    /// Append `value` to the end of the list and persist. Values that are
    /// empty after trimming are rejected as a no-op: nothing is written
    /// and the current list is returned unchanged.
    pub fn add(&self, value: &str) -> Result<Vec<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut values = self.read_record_tolerant()?;

        if value.trim().is_empty() {
            debug!("ignoring empty value");
            return Ok(values);
        }

        values.push(value.to_string());
        self.write_record(&values)?;

        debug!(count = values.len(), "saved value");
        Ok(values)
    }

    /// Remove every occurrence of `value` (exact match) and persist the
    /// result. Removing a value that is not present still re-persists the
    /// unchanged list, so the operation is idempotent.
    pub fn remove(&self, value: &str) -> Result<Vec<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut values = self.read_record_tolerant()?;
        values.retain(|v| v != value);
        self.write_record(&values)?;

        debug!(count = values.len(), "removed value");
        Ok(values)
    }

    fn read_record(&self) -> Result<Vec<String>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Persistence {
            op: "read",
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Like [`read_record`](Self::read_record), but a corrupt record is
    /// treated as empty so mutations can proceed; the next successful
    /// persist replaces it with a valid one.
    fn read_record_tolerant(&self) -> Result<Vec<String>, StoreError> {
        match self.read_record() {
            Ok(values) => Ok(values),
            Err(err) if err.is_corrupt() => {
                warn!(%err, "starting over with an empty list");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    fn write_record(&self, values: &[String]) -> Result<(), StoreError> {
        let persistence = |op: &'static str| {
            let path = self.path.clone();
            move |source: io::Error| StoreError::Persistence { op, path, source }
        };

        let content = serde_json::to_string(values)
            .map_err(io::Error::from)
            .map_err(persistence("encode"))?;

        let temp_path = self.path.with_extension("tmp");

        fs::write(&temp_path, content).map_err(persistence("write"))?;
        fs::rename(&temp_path, &self.path).map_err(persistence("replace"))?;

        Ok(())
    }
}
