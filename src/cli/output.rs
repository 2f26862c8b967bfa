//! Output formatting utilities

use crate::domain::Entry;
use chrono::{DateTime, Local, TimeZone};

/// Longest title shown in `list` before it is cut
const TITLE_WIDTH: usize = 60;

/// Format entries for `list`, one line each
pub fn format_entry_list(entries: &[Entry]) -> String {
    format_entry_list_in(entries, &Local)
}

/// Same as [`format_entry_list`] with dates shown in `tz`
pub fn format_entry_list_in<Tz>(entries: &[Entry], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if entries.is_empty() {
        return "No entries yet".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let marker = if entry.is_bookmarked { '*' } else { ' ' };
        output.push_str(&format!(
            "{}  {}  {} {}\n",
            entry.short_id(),
            entry.date.with_timezone(tz).format("%d-%m-%Y"),
            marker,
            truncate(entry.title(), TITLE_WIDTH)
        ));
    }
    output
}

/// Format one entry for `show`
pub fn format_entry(entry: &Entry) -> String {
    format_entry_in(entry, &Local)
}

pub fn format_entry_in<Tz>(entry: &Entry, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let date: DateTime<Tz> = entry.date.with_timezone(tz);
    let mut output = format!("id:       {}\n", entry.id);
    output.push_str(&format!("date:     {}\n", date.format("%A, %d %b %Y %H:%M")));
    if entry.is_bookmarked {
        output.push_str("bookmark: yes\n");
    }
    output.push('\n');
    output.push_str(&entry.notes);
    output.push('\n');
    output
}

/// Format reflection prompts as a numbered list
pub fn format_prompts(prompts: &[&str]) -> String {
    prompts
        .iter()
        .enumerate()
        .map(|(i, prompt)| format!("{}. {}\n", i + 1, prompt))
        .collect()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
