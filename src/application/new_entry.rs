//! New entry use case

use crate::domain::{DateReference, Entry, EntryDraft, DRAFT_PLACEHOLDER};
use crate::error::{JournalError, Result};
use crate::infrastructure::{EditorSession, EntryStore, PreferenceStore, Workspace};
use chrono::{DateTime, TimeZone, Utc};

/// What the user asked to save
#[derive(Debug, Clone, Default)]
pub struct NewEntryRequest {
    /// Entry text; `None` means compose it in the editor
    pub text: Option<String>,
    pub bookmark: bool,
    /// Date reference such as "yesterday"; `None` means now
    pub date: Option<String>,
}

/// Build a draft from the request. The text is left as the placeholder
/// when the request has none.
pub fn build_draft<Tz: TimeZone>(request: &NewEntryRequest, now: DateTime<Tz>) -> Result<EntryDraft> {
    let mut draft = EntryDraft::new();

    if let Some(text) = &request.text {
        draft = draft.with_notes(text.clone());
    }
    if request.bookmark {
        draft.toggle_bookmark();
    }

    match &request.date {
        Some(reference) => draft.set_date(DateReference::parse(reference)?.to_entry_date(now)),
        None => draft.set_date(now.with_timezone(&Utc)),
    }

    Ok(draft)
}

/// Turn a finished draft into an entry and add it to the store
pub fn save_draft<S: PreferenceStore>(store: &mut EntryStore<S>, draft: EntryDraft) -> Result<Entry> {
    if draft.is_blank() {
        return Err(JournalError::EmptyEntry);
    }

    let entry = draft.into_entry();
    store.add(entry.clone());
    log::debug!("Saved entry {}", entry.id);
    Ok(entry)
}

/// Service for saving new entries into a journal
pub struct NewEntryService {
    workspace: Workspace,
}

impl NewEntryService {
    pub fn new(workspace: Workspace) -> Self {
        NewEntryService { workspace }
    }

    /// Save an entry, composing it in the editor when no text was given
    pub fn execute(&self, request: &NewEntryRequest) -> Result<Entry> {
        let config = self.workspace.load_config()?;
        let mut draft = build_draft(request, chrono::Local::now())?;

        if request.text.is_none() {
            let editor = EditorSession::new(config.get_editor());
            let text = editor.compose(&self.workspace.draft_path(), DRAFT_PLACEHOLDER)?;
            draft = draft.with_notes(text);
        }

        let mut store = self.workspace.open_store(&config)?;
        save_draft(&mut store, draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::infrastructure::{MemoryPreferences, DEFAULT_SLOT_KEY};
    use tempfile::TempDir;

    fn request(text: &str) -> NewEntryRequest {
        NewEntryRequest {
            text: Some(text.to_string()),
            ..NewEntryRequest::default()
        }
    }

    #[test]
    fn test_build_draft_defaults_to_now() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap();
        let draft = build_draft(&request("hello"), now).unwrap();

        assert_eq!(draft.notes, "hello");
        assert!(!draft.is_bookmarked);
        assert_eq!(draft.date, now);
    }

    #[test]
    fn test_build_draft_with_date_and_bookmark() {
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 9, 15, 0).unwrap();
        let req = NewEntryRequest {
            text: Some("world".to_string()),
            bookmark: true,
            date: Some("yesterday".to_string()),
        };

        let draft = build_draft(&req, now).unwrap();
        assert!(draft.is_bookmarked);
        assert_eq!(draft.date, Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_build_draft_invalid_date() {
        let req = NewEntryRequest {
            date: Some("the day after".to_string()),
            ..request("x")
        };
        assert!(matches!(
            build_draft(&req, Utc::now()),
            Err(JournalError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_build_draft_without_text_is_blank() {
        let draft = build_draft(&NewEntryRequest::default(), Utc::now()).unwrap();
        assert!(draft.is_blank());
    }

    #[test]
    fn test_save_draft_appends() {
        let mut store = EntryStore::open(MemoryPreferences::new(), DEFAULT_SLOT_KEY);
        let draft = build_draft(&request("first"), Utc::now()).unwrap();

        let entry = save_draft(&mut store, draft).unwrap();
        assert_eq!(store.entries(), &[entry]);
    }

    #[test]
    fn test_save_blank_draft_rejected() {
        let mut store = EntryStore::open(MemoryPreferences::new(), DEFAULT_SLOT_KEY);

        let result = save_draft(&mut store, EntryDraft::new());
        assert!(matches!(result, Err(JournalError::EmptyEntry)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_execute_with_text_persists() {
        let temp = TempDir::new().unwrap();
        let workspace = init(temp.path()).unwrap();
        let service = NewEntryService::new(workspace.clone());

        let entry = service.execute(&request("persisted")).unwrap();

        let store = workspace.open_store(&workspace.load_config().unwrap()).unwrap();
        assert_eq!(store.entries(), &[entry]);
    }
}
