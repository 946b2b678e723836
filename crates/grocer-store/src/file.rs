//! # File Storage
//!
//! File-backed [`Storage`]: one JSON document per key under a data
//! directory.
//!
//! ## Layout
//! ```text
//! <data dir>/
//! └── groceryInventory.json    ← the whole inventory, rewritten per save
//! ```
//!
//! The key is used as the file stem, so a key maps to exactly one file and
//! a save replaces the prior contents in full.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::storage::Storage;

/// Storage backend keeping one file per key in a directory.
///
/// The directory is created on first save, so opening a store against a
/// path that does not exist yet starts from an empty inventory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a file storage rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// Returns the directory this storage writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => {
                debug!(key = %key, path = %path.display(), bytes = raw.len(), "storage read");
                Ok(Some(raw))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::read(key, err)),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|err| StoreError::write(key, err))?;

        // The write goes through a sibling temp file and a rename, so a
        // crash mid-write cannot leave a half-written inventory behind.
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|err| StoreError::write(key, err))?;
        fs::rename(&tmp, &path).map_err(|err| StoreError::write(key, err))?;

        debug!(key = %key, path = %path.display(), bytes = value.len(), "storage write");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
