//! Key-value storage contracts and lightweight test adapters.

pub mod prefs;
