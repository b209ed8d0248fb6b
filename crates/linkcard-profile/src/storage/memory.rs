use super::KeyValueStore;
use crate::error::StorageError;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-memory backend
///
/// Cloning yields a handle onto the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create store pre-populated with entries
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            inner: Arc::new(Mutex::new(map)),
        }
    }

    /// Copy of all entries
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.inner.lock().clone()
    }

    /// Number of keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the store has no keys
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Drop every key
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.lock().remove(key);
        Ok(())
    }

    fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), StorageError> {
        self.inner.lock().extend(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_contents() {
        let store = MemoryStore::new();
        let observer = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(observer.get("k").unwrap().as_deref(), Some("v"));
        observer.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn set_many_writes_all() {
        let store = MemoryStore::with_entries([("a", "1")]);
        store
            .set_many(vec![("b".into(), "2".into()), ("a".into(), "3".into())])
            .unwrap();
        let snap = store.snapshot();
        assert_eq!(snap.get("a").map(String::as_str), Some("3"));
        assert_eq!(snap.len(), 2);
    }
}
