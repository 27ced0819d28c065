//! Display values derived from file records: icons, colours, labels, dates, empty states.

use std::fmt::Display;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use platform_host::{FileKind, FileRecord, KnownSubject};
use system_ui::IconName;

/// Colour class for subjects without a dedicated colour.
pub const DEFAULT_SUBJECT_COLOR: &str = "bg-gray-100 text-gray-800";

/// Text shown in place of an upload date that cannot be parsed.
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Icon for a raw file-type tag. Unrecognized tags use the text icon.
pub fn file_type_icon(file_type: &str) -> IconName {
    match FileKind::from_tag(file_type) {
        FileKind::Image => IconName::Image,
        FileKind::Video => IconName::Video,
        FileKind::Text | FileKind::Other(_) => IconName::DocumentText,
    }
}

/// Colour class for a raw subject tag.
pub fn subject_color_class(subject: &str) -> &'static str {
    match KnownSubject::from_tag(subject) {
        KnownSubject::Mathematics => "bg-blue-100 text-blue-800",
        KnownSubject::Science => "bg-green-100 text-green-800",
        KnownSubject::English => "bg-purple-100 text-purple-800",
        KnownSubject::History => "bg-orange-100 text-orange-800",
        KnownSubject::Geography => "bg-teal-100 text-teal-800",
        KnownSubject::Art => "bg-pink-100 text-pink-800",
        KnownSubject::Music => "bg-yellow-100 text-yellow-800",
        KnownSubject::PhysicalEducation => "bg-red-100 text-red-800",
        KnownSubject::Other(_) => DEFAULT_SUBJECT_COLOR,
    }
}

/// Human label for a tag: first character uppercased, hyphens turned into spaces.
pub fn display_label(tag: &str) -> String {
    let spaced = tag.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parses an upload timestamp.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` read in `tz`, or a bare date read as
/// UTC midnight.
pub fn parse_upload_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(tz));
    }
    if let Some(naive) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return local_in(&naive, tz);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// Resolves a wall-clock time in `tz`. Repeated times take the earlier instant; times skipped by
/// a forward transition are read with the offset in force before it, landing after the gap.
fn local_in<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Some(at) = tz.from_local_datetime(naive).earliest() {
        return Some(at);
    }
    let before_gap = naive.checked_sub_signed(Duration::days(1))?;
    let offset = tz.offset_from_utc_datetime(&before_gap).fix();
    let utc = naive.checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))?;
    Some(tz.from_utc_datetime(&utc))
}

/// Formats an upload timestamp in `tz` as `Jan 15, 2024, 02:30 PM`.
pub fn format_upload_date_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_upload_date(raw, tz) {
        Some(at) => at.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

/// Formats an upload timestamp in the viewer's local time zone.
pub fn format_upload_date(raw: &str) -> String {
    format_upload_date_in(raw, &Local)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything a file card renders, derived from one record.
pub struct FileCardModel {
    /// Record id, used as the list key.
    pub id: String,
    /// File name shown as the card title.
    pub file_name: String,
    /// Icon chosen by file type.
    pub icon: IconName,
    /// Subject badge text.
    pub subject_label: String,
    /// Subject badge colour class.
    pub subject_color: &'static str,
    /// File type text.
    pub file_type_label: String,
    /// Formatted upload date.
    pub uploaded: String,
    /// Status text, verbatim.
    pub status: String,
}

impl FileCardModel {
    /// Derives card values, formatting dates in `tz`.
    pub fn from_record_in<Tz>(record: &FileRecord, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            id: record.id.clone(),
            file_name: record.file_name.clone(),
            icon: file_type_icon(&record.file_type),
            subject_label: display_label(&record.subject),
            subject_color: subject_color_class(&record.subject),
            file_type_label: display_label(&record.file_type),
            uploaded: format_upload_date_in(&record.upload_date, tz),
            status: record.status.clone(),
        }
    }

    /// Derives card values in the viewer's local time zone.
    pub fn from_record(record: &FileRecord) -> Self {
        Self::from_record_in(record, &Local)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which body the results area shows.
pub enum ResultsView {
    /// At least one record passes the filters.
    Cards,
    /// The store holds no records at all.
    NoContentYet,
    /// Records exist but the filters exclude all of them.
    NoMatches,
}

impl ResultsView {
    /// Chooses the results body from the full and filtered list lengths.
    pub fn select(total: usize, shown: usize) -> Self {
        if shown > 0 {
            Self::Cards
        } else if total == 0 {
            Self::NoContentYet
        } else {
            Self::NoMatches
        }
    }

    /// Empty-state copy, or `None` when cards are shown.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Cards => None,
            Self::NoContentYet => Some(
                "You haven't uploaded any content yet. Start by uploading your first file!",
            ),
            Self::NoMatches => {
                Some("No files match your current filters. Try adjusting your search criteria.")
            }
        }
    }
}

/// Summary line above the results, e.g. `Showing 2 of 5 files`.
pub fn results_summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} files")
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, LocalResult};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icons_fall_back_to_text() {
        assert_eq!(file_type_icon("text"), IconName::DocumentText);
        assert_eq!(file_type_icon("image"), IconName::Image);
        assert_eq!(file_type_icon("video"), IconName::Video);
        assert_eq!(file_type_icon("audio"), IconName::DocumentText);
        assert_eq!(file_type_icon(""), IconName::DocumentText);
    }

    #[test]
    fn subject_colors_cover_table_and_default() {
        assert_eq!(subject_color_class("mathematics"), "bg-blue-100 text-blue-800");
        assert_eq!(
            subject_color_class("physical-education"),
            "bg-red-100 text-red-800"
        );
        assert_eq!(subject_color_class("astronomy"), DEFAULT_SUBJECT_COLOR);
        assert_eq!(subject_color_class("Mathematics"), DEFAULT_SUBJECT_COLOR);
    }

    #[test]
    fn labels_capitalize_and_space_hyphens() {
        assert_eq!(display_label("mathematics"), "Mathematics");
        assert_eq!(display_label("physical-education"), "Physical education");
        assert_eq!(display_label("a-b-c"), "A b c");
        assert_eq!(display_label("ünits"), "Ünits");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn formats_rfc3339_dates_in_the_given_zone() {
        assert_eq!(
            format_upload_date_in("2024-01-15T14:30:00.000Z", &Utc),
            "Jan 15, 2024, 02:30 PM"
        );
        let plus_one = FixedOffset::east_opt(3600).expect("offset");
        assert_eq!(
            format_upload_date_in("2024-01-15T23:30:00Z", &plus_one),
            "Jan 16, 2024, 12:30 AM"
        );
    }

    #[test]
    fn naive_and_date_only_inputs_are_accepted() {
        assert_eq!(
            format_upload_date_in("2024-03-05T09:07", &Utc),
            "Mar 5, 2024, 09:07 AM"
        );
        assert_eq!(
            format_upload_date_in("2024-03-05T21:07:44.5", &Utc),
            "Mar 5, 2024, 09:07 PM"
        );
        assert_eq!(
            format_upload_date_in("2024-07-04", &Utc),
            "Jul 4, 2024, 12:00 AM"
        );
    }

    /// Central-European-style zone: +01:00, then +02:00 from 2024-03-31T01:00Z.
    #[derive(Debug, Clone, Copy)]
    struct SpringForward;

    impl SpringForward {
        fn offset_at(utc: &NaiveDateTime) -> FixedOffset {
            let switch = NaiveDate::from_ymd_opt(2024, 3, 31)
                .and_then(|d| d.and_hms_opt(1, 0, 0))
                .expect("switch instant");
            let hours = if *utc < switch { 1 } else { 2 };
            FixedOffset::east_opt(hours * 3600).expect("offset")
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            Self
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).expect("midnight"))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let valid: Vec<_> = [1, 2]
                .into_iter()
                .filter_map(|hours| FixedOffset::east_opt(hours * 3600))
                .filter(|offset| {
                    let utc = *local - Duration::seconds(i64::from(offset.local_minus_utc()));
                    Self::offset_at(&utc) == *offset
                })
                .collect();
            match valid.as_slice() {
                [] => LocalResult::None,
                [one] => LocalResult::Single(*one),
                [first, second, ..] => LocalResult::Ambiguous(*first, *second),
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            Self::offset_at(&utc.and_hms_opt(0, 0, 0).expect("midnight"))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            Self::offset_at(utc)
        }
    }

    #[test]
    fn wall_clock_times_inside_a_forward_gap_move_past_it() {
        assert_eq!(
            format_upload_date_in("2024-03-31T02:30", &SpringForward),
            "Mar 31, 2024, 03:30 AM"
        );
        assert_eq!(
            format_upload_date_in("2024-03-31T01:59", &SpringForward),
            "Mar 31, 2024, 01:59 AM"
        );
        assert_eq!(
            format_upload_date_in("2024-03-31T03:00", &SpringForward),
            "Mar 31, 2024, 03:00 AM"
        );
    }

    #[test]
    fn unparseable_dates_render_invalid_label() {
        for raw in ["", "yesterday", "2024-13-40", "15/01/2024"] {
            assert_eq!(format_upload_date_in(raw, &Utc), INVALID_DATE_LABEL);
        }
    }

    #[test]
    fn card_model_bundles_derived_values() {
        let record = FileRecord {
            id: "r1".to_string(),
            subject: "physical-education".to_string(),
            file_name: "Warmup.mp4".to_string(),
            file_type: "video".to_string(),
            upload_date: "2024-01-15T14:30:00Z".to_string(),
            status: "Completed".to_string(),
        };
        assert_eq!(
            FileCardModel::from_record_in(&record, &Utc),
            FileCardModel {
                id: "r1".to_string(),
                file_name: "Warmup.mp4".to_string(),
                icon: IconName::Video,
                subject_label: "Physical education".to_string(),
                subject_color: "bg-red-100 text-red-800",
                file_type_label: "Video".to_string(),
                uploaded: "Jan 15, 2024, 02:30 PM".to_string(),
                status: "Completed".to_string(),
            }
        );
    }

    #[test]
    fn results_view_distinguishes_empty_store_from_no_matches() {
        assert_eq!(ResultsView::select(0, 0), ResultsView::NoContentYet);
        assert_eq!(ResultsView::select(3, 0), ResultsView::NoMatches);
        assert_eq!(ResultsView::select(3, 2), ResultsView::Cards);
        assert_ne!(
            ResultsView::NoContentYet.message(),
            ResultsView::NoMatches.message()
        );
        assert_eq!(ResultsView::Cards.message(), None);
        assert_eq!(results_summary(2, 5), "Showing 2 of 5 files");
    }
}
