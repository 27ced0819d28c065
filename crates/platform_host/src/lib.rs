//! Typed host-domain contracts and shared models for the content library.
//!
//! This crate is the API-first boundary between the browser view and whatever holds the uploaded
//! file list. It exposes the key-value [`PrefsStore`] contract with in-memory and no-op adapters,
//! and the [`FileRecord`] model persisted by the upload flow. Concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;
pub mod uploads;

pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};
pub use uploads::{
    decode_upload_entries, load_upload_entries_with, FileKind, FileRecord, KnownSubject,
    UploadEntry, UploadsError, UPLOADED_FILES_KEY,
};
