//! Choice lists for the subject and file-type selectors.

use std::collections::BTreeSet;

use platform_host::FileRecord;

use crate::filter::ALL_FILTER;
use crate::presenter::display_label;

/// File-type selector choices as `(value, label)` pairs, starting with the catch-all.
pub const FILE_TYPE_OPTIONS: [(&str, &str); 4] = [
    (ALL_FILTER, "All File Types"),
    ("text", "Text Documents"),
    ("image", "Images"),
    ("video", "Videos"),
];

/// Distinct subjects present in `records`, sorted ascending by UTF-8 bytes.
pub fn subject_catalog(records: &[FileRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.subject.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Subject selector choices as `(value, label)` pairs, starting with the catch-all.
pub fn subject_options(records: &[FileRecord]) -> Vec<(String, String)> {
    std::iter::once((ALL_FILTER.to_string(), "All Subjects".to_string()))
        .chain(subject_catalog(records).into_iter().map(|subject| {
            let label = display_label(&subject);
            (subject, label)
        }))
        .collect()
}
