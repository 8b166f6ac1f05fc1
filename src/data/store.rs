//! Local design persistence
//!
//! Stores the whole collection of saved designs as one JSON array in a
//! single file, replaced wholesale on every write. Malformed or missing
//! data is never fatal: loading falls back to an empty collection so the
//! application always starts.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::models::DesignRecord;
use crate::util::paths::designs_path;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to write designs file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize designs: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed store for the saved-design collection.
#[derive(Debug, Clone)]
pub struct DesignStore {
    path: PathBuf,
}

impl DesignStore {
    /// Create a store backed by the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the default location (~/.tshirt-studio/designs.json).
    pub fn open_default() -> Self {
        Self::new(designs_path())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all saved designs in insertion order.
    ///
    /// Returns an empty collection when the file is missing, unreadable,
    /// or holds malformed JSON. Corrupt data is logged and otherwise
    /// ignored; it will be overwritten by the next save.
    pub fn load_all(&self) -> Vec<DesignRecord> {
        if !self.path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read designs file");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Malformed designs file, starting empty");
                Vec::new()
            }
        }
    }

    /// Replace the stored collection with `records` in one write.
    pub fn save_all(&self, records: &[DesignRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
