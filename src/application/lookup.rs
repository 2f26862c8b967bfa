//! Resolve user-typed entry ids

use crate::domain::Entry;
use crate::error::{JournalError, Result};
use uuid::Uuid;

/// Resolve a full id or a unique id prefix to the id of an entry in `entries`
pub fn resolve_id(entries: &[Entry], input: &str) -> Result<Uuid> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Err(JournalError::EntryNotFound(input.to_string()));
    }

    if let Ok(id) = Uuid::parse_str(&needle) {
        return entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.id)
            .ok_or_else(|| JournalError::EntryNotFound(input.to_string()));
    }

    let mut matches: Vec<Uuid> = entries
        .iter()
        .map(|e| e.id)
        .filter(|id| {
            id.hyphenated().to_string().starts_with(&needle)
                || id.simple().to_string().starts_with(&needle)
        })
        .collect();
    matches.sort();
    matches.dedup();

    match matches.len() {
        0 => Err(JournalError::EntryNotFound(input.to_string())),
        1 => Ok(matches[0]),
        n => Err(JournalError::AmbiguousId {
            prefix: input.to_string(),
            matches: n,
        }),
    }
}
