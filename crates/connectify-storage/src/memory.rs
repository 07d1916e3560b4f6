//! In-memory medium, used by tests and as the default when nothing needs
//! to survive a restart.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex, PoisonError};

use crate::KeyValueMedium;

/// A [`KeyValueMedium`] backed by a shared in-memory map.
///
/// Clones share the same map, so a medium handed to both the session
/// manager and the idle supervisor behaves like one store. Nothing here
/// can fail, which the `Infallible` error type states in the signature.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryMedium {
    /// Creates an empty medium.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the map of whole string values underneath is still usable.
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueMedium for MemoryMedium {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.entries().remove(key);
        Ok(())
    }
}
