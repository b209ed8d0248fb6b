//! Key/value persistence seam
//!
//! The store only ever needs string values under string keys, the same
//! contract a browser's local storage offers. Backends:
//! - [`MemoryStore`]: process-local, clones share contents
//! - [`FileStore`]: JSON string map on disk with atomic replacement

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// Synchronous string key/value backend
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read the value under `key`
    ///
    /// # Errors
    /// Backend failure; a missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Backend failure.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting a missing key succeeds
    ///
    /// # Errors
    /// Backend failure.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Write several entries together
    ///
    /// Backends that can commit atomically override this; the default
    /// writes one entry at a time and stops at the first failure.
    ///
    /// # Errors
    /// Backend failure.
    fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), StorageError> {
        for (key, value) in &entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), StorageError> {
        (**self).set_many(entries)
    }
}
