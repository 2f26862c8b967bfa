//! Journal entries and the draft they are composed from

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text a fresh draft starts with; saving it unchanged is treated as blank.
pub const DRAFT_PLACEHOLDER: &str = "Start Writing...";

/// One journal record.
///
/// Serialized field names follow the stored format
/// (`id`, `notes`, `isBookmarked`, `date`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    pub notes: String,
    pub is_bookmarked: bool,
    pub date: DateTime<Utc>,
}

impl Entry {
    /// Create an entry with a freshly generated id
    pub fn new(notes: impl Into<String>, is_bookmarked: bool, date: DateTime<Utc>) -> Self {
        Entry {
            id: Uuid::new_v4(),
            notes: notes.into(),
            is_bookmarked,
            date,
        }
    }

    /// First non-empty line of the notes, used as a list title
    pub fn title(&self) -> &str {
        self.notes
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }

    /// First eight characters of the id
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// Unsaved entry being composed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub notes: String,
    pub is_bookmarked: bool,
    pub date: DateTime<Utc>,
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryDraft {
    pub fn new() -> Self {
        EntryDraft {
            notes: DRAFT_PLACEHOLDER.to_string(),
            is_bookmarked: false,
            date: Utc::now(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn toggle_bookmark(&mut self) {
        self.is_bookmarked = !self.is_bookmarked;
    }

    /// Override the default (creation time) date
    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.date = date;
    }

    /// True when nothing has been written yet
    pub fn is_blank(&self) -> bool {
        let trimmed = self.notes.trim();
        trimmed.is_empty() || trimmed == DRAFT_PLACEHOLDER
    }

    /// Bundle the draft into a new entry with a fresh id
    pub fn into_entry(self) -> Entry {
        Entry::new(self.notes.trim_end().to_string(), self.is_bookmarked, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_serialized_field_names() {
        let entry = Entry {
            id: Uuid::from_u128(0xa),
            notes: "hello".to_string(),
            is_bookmarked: true,
            date: day(2024, 1, 1),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-00000000000a");
        assert_eq!(json["notes"], "hello");
        assert_eq!(json["isBookmarked"], true);
        assert_eq!(json["date"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let entries = vec![
            Entry::new("first", false, day(2024, 1, 1)),
            Entry::new("", true, day(2023, 12, 31)),
            Entry::new("multi\nline ✍️", false, Utc::now()),
        ];

        let encoded = serde_json::to_vec(&entries).unwrap();
        let decoded: Vec<Entry> = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, entries);
    }

    #[test]
    fn test_new_entries_get_distinct_ids() {
        let a = Entry::new("same", false, day(2024, 1, 1));
        let b = Entry::new("same", false, day(2024, 1, 1));
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_title_skips_blank_lines() {
        let entry = Entry::new("\n\n  Morning walk \nthen coffee", false, Utc::now());
        assert_eq!(entry.title(), "Morning walk");

        let empty = Entry::new("", false, Utc::now());
        assert_eq!(empty.title(), "");
    }

    #[test]
    fn test_short_id() {
        let entry = Entry {
            id: Uuid::parse_str("1b4e28ba-2fa1-11d2-883f-0016d3cca427").unwrap(),
            notes: String::new(),
            is_bookmarked: false,
            date: Utc::now(),
        };
        assert_eq!(entry.short_id(), "1b4e28ba");
    }

    #[test]
    fn test_draft_defaults() {
        let draft = EntryDraft::new();
        assert_eq!(draft.notes, DRAFT_PLACEHOLDER);
        assert!(!draft.is_bookmarked);
        assert!(draft.is_blank());
    }

    #[test]
    fn test_draft_blank_detection() {
        assert!(EntryDraft::new().with_notes("   \n").is_blank());
        assert!(EntryDraft::new().with_notes("Start Writing...\n").is_blank());
        assert!(!EntryDraft::new().with_notes("Start Writing... today").is_blank());
    }

    #[test]
    fn test_draft_into_entry() {
        let mut draft = EntryDraft::new().with_notes("grateful for rain\n");
        draft.toggle_bookmark();
        draft.set_date(day(2024, 1, 2));

        let entry = draft.into_entry();
        assert_eq!(entry.notes, "grateful for rain");
        assert!(entry.is_bookmarked);
        assert_eq!(entry.date, day(2024, 1, 2));
    }

    #[test]
    fn test_toggle_bookmark_twice() {
        let mut draft = EntryDraft::new();
        draft.toggle_bookmark();
        draft.toggle_bookmark();
        assert!(!draft.is_bookmarked);
    }
}
