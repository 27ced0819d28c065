//! Launch parameters that pre-select filter criteria when the library opens.

use serde::Deserialize;
use serde_json::Value;

use crate::filter::{FilterCriteria, ALL_FILTER};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Optional initial criteria, typically taken from the page URL.
pub struct ContentLibraryLaunch {
    /// Initial search text.
    pub search: Option<String>,
    /// Initial subject tag.
    pub subject: Option<String>,
    /// Initial file-type tag.
    pub file_type: Option<String>,
}

impl ContentLibraryLaunch {
    /// Reads launch options from a JSON value. Anything malformed yields the defaults.
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    /// Criteria the view starts with. Blank selections mean "all".
    pub fn initial_criteria(&self) -> FilterCriteria {
        fn selection(value: &Option<String>) -> String {
            match value.as_deref().map(str::trim) {
                Some(tag) if !tag.is_empty() => tag.to_string(),
                _ => ALL_FILTER.to_string(),
            }
        }

        FilterCriteria {
            search_term: self.search.clone().unwrap_or_default(),
            selected_subject: selection(&self.subject),
            selected_file_type: selection(&self.file_type),
        }
    }
}
