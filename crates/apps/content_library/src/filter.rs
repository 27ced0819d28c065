//! Filter criteria and the pure filter over the uploaded-file list.

use platform_host::FileRecord;

/// Sentinel selecting every subject or file type.
pub const ALL_FILTER: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
/// The three independent inputs that narrow the library view.
pub struct FilterCriteria {
    /// Free-text query; empty disables the text predicate.
    pub search_term: String,
    /// Exact subject tag, or [`ALL_FILTER`].
    pub selected_subject: String,
    /// Exact file-type tag, or [`ALL_FILTER`].
    pub selected_file_type: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_subject: ALL_FILTER.to_string(),
            selected_file_type: ALL_FILTER.to_string(),
        }
    }
}

impl FilterCriteria {
    /// Restores every criterion to its default, whatever it held before.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` when no predicate is enabled; the clear action is disabled in that state.
    pub fn is_default(&self) -> bool {
        self.search_term.is_empty()
            && self.selected_subject == ALL_FILTER
            && self.selected_file_type == ALL_FILTER
    }

    /// Returns `true` when `record` passes every enabled predicate.
    pub fn matches(&self, record: &FileRecord) -> bool {
        self.matches_text(record) && self.matches_subject(record) && self.matches_file_type(record)
    }

    fn matches_text(&self, record: &FileRecord) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        record.file_name.to_lowercase().contains(&needle)
            || record.subject.to_lowercase().contains(&needle)
    }

    fn matches_subject(&self, record: &FileRecord) -> bool {
        self.selected_subject == ALL_FILTER || record.subject == self.selected_subject
    }

    fn matches_file_type(&self, record: &FileRecord) -> bool {
        self.selected_file_type == ALL_FILTER || record.file_type == self.selected_file_type
    }
}

/// Returns the records that pass `criteria`, in their original relative order.
pub fn filter_records(records: &[FileRecord], criteria: &FilterCriteria) -> Vec<FileRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(id: &str, subject: &str, file_type: &str, file_name: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            subject: subject.to_string(),
            file_name: file_name.to_string(),
            file_type: file_type.to_string(),
            upload_date: "2024-01-15T14:30:00Z".to_string(),
            status: "Processed".to_string(),
        }
    }

    fn ids(records: &[FileRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn text_predicate_matches_name_or_subject_ignoring_case() {
        let records = vec![
            record("1", "mathematics", "text", "Notes.pdf"),
            record("2", "physical-education", "video", "Warmup.mp4"),
            record("3", "art", "image", "Sketch.png"),
        ];
        let mut criteria = FilterCriteria::default();

        criteria.search_term = "notes".to_string();
        assert_eq!(ids(&filter_records(&records, &criteria)), vec!["1"]);

        criteria.search_term = "PHYSICAL".to_string();
        assert_eq!(ids(&filter_records(&records, &criteria)), vec!["2"]);

        criteria.search_term = "zzz".to_string();
        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn subject_and_type_predicates_are_exact() {
        let records = vec![
            record("1", "science", "image", "Cell.png"),
            record("2", "Science", "image", "Leaf.png"),
            record("3", "science", "text", "Lab.docx"),
        ];
        let criteria = FilterCriteria {
            selected_subject: "science".to_string(),
            selected_file_type: "image".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &criteria)), vec!["1"]);
    }

    #[test]
    fn predicates_compose_conjunctively() {
        let records = vec![
            record("1", "history", "text", "Rome.pdf"),
            record("2", "history", "image", "Rome.png"),
            record("3", "geography", "text", "Rome-map.pdf"),
        ];
        let criteria = FilterCriteria {
            search_term: "rome".to_string(),
            selected_subject: "history".to_string(),
            selected_file_type: "text".to_string(),
        };
        for r in &records {
            let expected = criteria.matches_text(r)
                && criteria.matches_subject(r)
                && criteria.matches_file_type(r);
            assert_eq!(criteria.matches(r), expected);
        }
        assert_eq!(ids(&filter_records(&records, &criteria)), vec!["1"]);
    }

    #[test]
    fn clear_resets_any_prior_values() {
        let mut criteria = FilterCriteria {
            search_term: "algebra".to_string(),
            selected_subject: "mathematics".to_string(),
            selected_file_type: "video".to_string(),
        };
        assert!(!criteria.is_default());
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
        assert!(criteria.is_default());
        assert_eq!(criteria.search_term, "");
        assert_eq!(criteria.selected_subject, "all");
        assert_eq!(criteria.selected_file_type, "all");
    }

    #[test]
    fn any_single_enabled_predicate_leaves_default_state() {
        assert!(FilterCriteria::default().is_default());
        let variants = [
            FilterCriteria {
                search_term: " ".to_string(),
                ..FilterCriteria::default()
            },
            FilterCriteria {
                selected_subject: "art".to_string(),
                ..FilterCriteria::default()
            },
            FilterCriteria {
                selected_file_type: "text".to_string(),
                ..FilterCriteria::default()
            },
        ];
        for criteria in variants {
            assert!(!criteria.is_default(), "{criteria:?}");
        }
    }
}
