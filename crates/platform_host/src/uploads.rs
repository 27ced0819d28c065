//! Uploaded-file records persisted by the upload flow and read by the content library.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::PrefsStore;

/// Storage key holding the JSON array of [`FileRecord`] values.
pub const UPLOADED_FILES_KEY: &str = "uploadedFiles";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A stored reference to one uploaded piece of content.
///
/// Only `id` is required. Missing display fields decode as empty strings, which the library
/// presents as an unknown type and an invalid date.
pub struct FileRecord {
    /// Opaque identifier, stable per record.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Open subject tag such as `mathematics` or `physical-education`.
    #[serde(default)]
    pub subject: String,
    /// Display name; not guaranteed unique.
    #[serde(default)]
    pub file_name: String,
    /// Type tag, normally `text`, `image` or `video`.
    #[serde(default)]
    pub file_type: String,
    /// Upload timestamp as written by the upload flow.
    #[serde(default)]
    pub upload_date: String,
    /// Free-form status rendered verbatim.
    #[serde(default)]
    pub status: String,
}

impl FileRecord {
    /// Typed view of [`FileRecord::file_type`].
    pub fn kind(&self) -> FileKind {
        FileKind::from_tag(&self.file_type)
    }

    /// Typed view of [`FileRecord::subject`].
    pub fn known_subject(&self) -> KnownSubject {
        KnownSubject::from_tag(&self.subject)
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Closed set of file kinds the library knows how to present.
pub enum FileKind {
    /// Text documents.
    Text,
    /// Still images.
    Image,
    /// Video clips.
    Video,
    /// Any other tag, presented like text.
    Other(String),
}

impl FileKind {
    /// Maps a raw tag onto a kind. Matching is exact.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "image" => Self::Image,
            "video" => Self::Video,
            other => Self::Other(other.to_string()),
        }
    }

    /// Raw tag for this kind.
    pub fn tag(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Other(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Subjects with a dedicated presentation colour, plus a catch-all.
pub enum KnownSubject {
    /// `mathematics`
    Mathematics,
    /// `science`
    Science,
    /// `english`
    English,
    /// `history`
    History,
    /// `geography`
    Geography,
    /// `art`
    Art,
    /// `music`
    Music,
    /// `physical-education`
    PhysicalEducation,
    /// Any other subject tag.
    Other(String),
}

impl KnownSubject {
    /// Maps a raw subject tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "mathematics" => Self::Mathematics,
            "science" => Self::Science,
            "english" => Self::English,
            "history" => Self::History,
            "geography" => Self::Geography,
            "art" => Self::Art,
            "music" => Self::Music,
            "physical-education" => Self::PhysicalEducation,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
/// Failures while reading the persisted upload list.
pub enum UploadsError {
    /// The backing store could not be read.
    #[error("uploaded files store read failed: {0}")]
    Store(String),
    /// The stored payload is not a JSON array.
    #[error("uploaded files payload is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One decoded array element: a record, or the reason that element was unusable.
pub type UploadEntry = Result<FileRecord, serde_json::Error>;

/// Decodes the raw JSON payload stored under [`UPLOADED_FILES_KEY`] element by element.
///
/// A bad element (not an object, no `id`, a field of the wrong JSON type) yields an `Err` entry
/// at its position and leaves its neighbours intact.
///
/// # Errors
///
/// Returns [`UploadsError::Decode`] when the payload is not a JSON array.
pub fn decode_upload_entries(raw: &str) -> Result<Vec<UploadEntry>, UploadsError> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    Ok(elements.into_iter().map(FileRecord::deserialize).collect())
}

/// Reads and decodes the upload list through a [`PrefsStore`]. A missing key is an empty list.
///
/// # Errors
///
/// Returns an error when the store read fails or the payload is not a JSON array.
pub async fn load_upload_entries_with<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<Vec<UploadEntry>, UploadsError> {
    let raw = store
        .load_pref(UPLOADED_FILES_KEY)
        .await
        .map_err(UploadsError::Store)?;
    match raw {
        Some(raw) => decode_upload_entries(&raw),
        None => Ok(Vec::new()),
    }
}
