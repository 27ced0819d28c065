//! `localStorage`-backed key-value store.
//!
//! Reads are synchronous at the browser API boundary so the content library can hydrate its list
//! before the first paint. The type also implements [`platform_host::PrefsStore`] for hosts that
//! go through the async contract. Nothing here writes; the upload flow owns the key.

use platform_host::{PrefsStore, PrefsStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl WebPrefsStore {
    /// Loads the raw JSON string stored under `key`.
    ///
    /// Returns `None` when the key is absent or storage is unavailable (private browsing,
    /// disabled storage, non-browser targets).
    pub fn load_json(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { Ok(store.load_json(key)) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{load_upload_entries_with, UPLOADED_FILES_KEY};

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_store_reads_as_empty() {
        assert_eq!(WebPrefsStore.load_json(UPLOADED_FILES_KEY), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_store_yields_empty_upload_list_through_contract() {
        let entries = block_on(load_upload_entries_with(&WebPrefsStore)).expect("load");
        assert!(entries.is_empty());
    }
}
