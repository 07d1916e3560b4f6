//! File-backed medium: the process-local stand-in for browser local
//! storage. One JSON object per file, read on every get, rewritten whole
//! on every set/remove.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{KeyValueMedium, StorageError};

/// A [`KeyValueMedium`] persisted as a JSON map in a single file.
///
/// Every read goes to the file, so the medium observes external changes
/// and survives process restarts — the property the session token needs.
/// The file not existing yet is an empty medium, not an error.
///
/// With two keys and human-scale write rates, re-reading and rewriting the
/// whole map per operation is the simplest thing that is correct.
#[derive(Debug, Clone)]
pub struct FileMedium {
    path: Arc<PathBuf>,
}

impl FileMedium {
    /// Creates a medium backed by the file at `path`. No I/O happens
    /// until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn load_map(&self) -> Result<HashMap<String, String>, StorageError> {
        let bytes = match std::fs::read(&*self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(StorageError::ReadFailed(e)),
        };
        serde_json::from_slice(&bytes).map_err(StorageError::Corrupt)
    }

    fn store_map(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        // HashMap<String, String> always serializes; only the write can fail.
        let bytes = serde_json::to_vec_pretty(map).expect("string map serializes to JSON");
        std::fs::write(&*self.path, bytes).map_err(StorageError::WriteFailed)
    }

    /// Loads the map for a write, healing corruption: a map we cannot
    /// parse is about to be replaced wholesale anyway.
    fn load_map_for_write(&self) -> Result<HashMap<String, String>, StorageError> {
        match self.load_map() {
            Ok(map) => Ok(map),
            Err(StorageError::Corrupt(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "session file is corrupt; replacing it"
                );
                Ok(HashMap::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl KeyValueMedium for FileMedium {
    type Error = StorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.load_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut map = self.load_map_for_write()?;
        map.insert(key.to_owned(), value.to_owned());
        self.store_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        let mut map = self.load_map_for_write()?;
        if map.remove(key).is_some() {
            self.store_map(&map)?;
        }
        Ok(())
    }
}
