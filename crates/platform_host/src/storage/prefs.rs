//! Read-only key-value contract (JSON text per key) and in-process adapters.
//!
//! The content library reads the upload list once at mount and never writes it back, so the
//! contract carries a single read.

use std::{collections::HashMap, future::Future, pin::Pin};

/// Object-safe boxed future returned by [`PrefsStore::load_pref`].
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that resolves a string key to the raw JSON text stored under it.
pub trait PrefsStore {
    /// Reads the raw JSON stored under `key`; `Ok(None)` when the key was never written.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that never holds anything, used by stubbed hosts.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }
}

#[derive(Debug, Clone, Default)]
/// Fixed in-memory entries, for headless hosts and tests.
pub struct MemoryPrefsStore {
    entries: HashMap<String, String>,
}

impl MemoryPrefsStore {
    /// Builds a store holding a single raw entry.
    pub fn with_entry(key: &str, raw_json: &str) -> Self {
        Self {
            entries: HashMap::from([(key.to_string(), raw_json.to_string())]),
        }
    }

    /// Synchronously reads the raw entry for `key`.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let raw = self.get_raw(key).map(str::to_string);
        Box::pin(async move { Ok(raw) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_store_returns_only_its_entry() {
        let store = MemoryPrefsStore::with_entry("uploads", "[1]");
        let store_obj: &dyn PrefsStore = &store;

        assert_eq!(
            block_on(store_obj.load_pref("uploads")).expect("load"),
            Some("[1]".to_string())
        );
        assert_eq!(block_on(store_obj.load_pref("other")).expect("load"), None);
        assert_eq!(store.get_raw("uploads"), Some("[1]"));
    }

    #[test]
    fn empty_stores_read_as_absent() {
        let noop: &dyn PrefsStore = &NoopPrefsStore;
        let memory = MemoryPrefsStore::default();
        assert_eq!(block_on(noop.load_pref("k")).expect("load"), None);
        assert_eq!(block_on(memory.load_pref("k")).expect("load"), None);
    }
}
