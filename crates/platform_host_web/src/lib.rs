//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! The content library reads its upload list from `window.localStorage`; this crate owns that
//! adapter and the compile-time choice between the browser store and a stubbed host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod storage;

pub use adapters::{
    host_strategy_name, prefs_store, selected_host_strategy, HostStrategy, PrefsStoreAdapter,
};
pub use storage::local_prefs::WebPrefsStore;
