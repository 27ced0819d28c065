use platform_host::{NoopPrefsStore, PrefsStore, PrefsStoreFuture};

use crate::WebPrefsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from `platform_host_web`.
    Browser,
    /// No-op adapters for headless builds and previews without storage.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "host-stub",
    }
}

/// Adapter enum that erases the concrete key-value backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage`.
    Browser(WebPrefsStore),
    /// No-op fallback for stubbed hosts.
    Stub(NoopPrefsStore),
}

impl PrefsStoreAdapter {
    /// Synchronously reads the raw value for `key`.
    ///
    /// Used at mount time, before any async executor has run.
    pub fn read_pref_now(self, key: &str) -> Option<String> {
        match self {
            Self::Browser(store) => store.load_json(key),
            Self::Stub(_) => None,
        }
    }
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Stub(store) => store.load_pref(key),
        }
    }
}

/// Builds the key-value adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Stub => PrefsStoreAdapter::Stub(NoopPrefsStore),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::UPLOADED_FILES_KEY;

    use super::*;

    #[test]
    fn strategy_name_matches_selected_strategy() {
        let expected = if cfg!(feature = "host-stub") {
            "host-stub"
        } else {
            "browser"
        };
        assert_eq!(host_strategy_name(), expected);
    }

    #[test]
    fn stub_adapter_never_holds_uploads() {
        let adapter = PrefsStoreAdapter::Stub(NoopPrefsStore);
        assert_eq!(adapter.read_pref_now(UPLOADED_FILES_KEY), None);
        assert_eq!(
            block_on(adapter.load_pref(UPLOADED_FILES_KEY)).expect("load"),
            None
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn selected_adapter_reads_nothing_off_browser() {
        assert_eq!(prefs_store().read_pref_now(UPLOADED_FILES_KEY), None);
    }
}
