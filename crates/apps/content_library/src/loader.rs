//! Fail-soft loading of the uploaded-file list.
//!
//! A missing key, unavailable storage, or a payload that is not a JSON array collapses into an
//! empty list plus a console warning. Inside a valid array, each unusable element is skipped with
//! its own warning and the rest still load. The view never sees an error.

use leptos::logging;
use platform_host::{
    decode_upload_entries, load_upload_entries_with, FileRecord, PrefsStore, UploadEntry,
    UPLOADED_FILES_KEY,
};

fn usable_records(entries: Vec<UploadEntry>) -> Vec<FileRecord> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Ok(record) => Some(record),
            Err(err) => {
                logging::warn!("content library skipped uploaded file #{index}: {err}");
                None
            }
        })
        .collect()
}

/// Decodes a raw stored payload, substituting an empty list when absent or malformed.
pub fn records_or_empty(raw: Option<&str>) -> Vec<FileRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match decode_upload_entries(raw) {
        Ok(entries) => usable_records(entries),
        Err(err) => {
            logging::warn!("content library load failed: {err}");
            Vec::new()
        }
    }
}

/// Reads the upload list synchronously from the host's key-value store.
pub fn load_library_now() -> Vec<FileRecord> {
    let raw = platform_host_web::prefs_store().read_pref_now(UPLOADED_FILES_KEY);
    records_or_empty(raw.as_deref())
}

/// Reads the upload list through any [`PrefsStore`].
pub async fn load_library_with<S: PrefsStore + ?Sized>(store: &S) -> Vec<FileRecord> {
    match load_upload_entries_with(store).await {
        Ok(entries) => usable_records(entries),
        Err(err) => {
            logging::warn!("content library load failed: {err}");
            Vec::new()
        }
    }
}
