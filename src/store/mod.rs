pub mod values;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use values::ValueStore;

/// Errors surfaced by [`ValueStore`]. Corruption is recoverable (callers
/// fall back to an empty list); persistence failures leave the stored
/// record and any in-memory copy of it untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("saved values at {} are not a valid list: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to {op} saved values at {}: {source}", path.display())]
    Persistence {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}
