//! Testing utilities for the LinkCard workspace
//!
//! Shared collaborators, storage doubles and stored-record fixtures.

#![allow(missing_docs)]

use async_trait::async_trait;
use linkcard_page::{Clipboard, ClipboardError, Notification, NotificationKind, Notifier};
use linkcard_profile::config::PROFILE_KEY;
use linkcard_profile::{KeyValueStore, LinkEntry, MemoryStore, StorageError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Memory store whose reads and writes can be switched to fail
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FailingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool) -> Result<(), StorageError> {
        if flag.load(Ordering::SeqCst) {
            Err(StorageError::Unavailable("injected failure".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::check(&self.fail_reads)?;
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::check(&self.fail_writes)?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::check(&self.fail_writes)?;
        self.inner.remove(key)
    }

    fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), StorageError> {
        Self::check(&self.fail_writes)?;
        self.inner.set_many(entries)
    }
}

/// Notifier that keeps everything it was given
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }

    pub fn messages(&self, kind: NotificationKind) -> Vec<String> {
        self.seen
            .lock()
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}

/// Clipboard held in memory, optionally refusing every copy
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    refuse: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if self.refuse {
            return Err(ClipboardError::CopyFailed("permission denied".into()));
        }
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

/// Profile JSON as written before email and migrations existed
pub fn legacy_profile_json(display_name: &str, bio: &str) -> String {
    serde_json::json!({
        "displayName": display_name,
        "bio": bio,
        "links": [],
    })
    .to_string()
}

/// Memory store holding `json` under the profile key
pub fn store_with_profile(json: &str) -> MemoryStore {
    MemoryStore::with_entries([(PROFILE_KEY, json)])
}

pub fn sample_links() -> Vec<LinkEntry> {
    vec![
        LinkEntry::new("Blog", "https://blog.example"),
        LinkEntry::new("GitHub", "https://github.com/example"),
        LinkEntry::new("Shop", "https://shop.example"),
    ]
}
