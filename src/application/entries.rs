//! List, show and delete entries

use crate::application::lookup::resolve_id;
use crate::domain::Entry;
use crate::error::{JournalError, Result};
use crate::infrastructure::{DirectoryPreferences, EntryStore, PreferenceStore, Workspace};

/// Remove the entry named by `input` (full id or unique prefix)
pub fn delete_entry<S: PreferenceStore>(store: &mut EntryStore<S>, input: &str) -> Result<Entry> {
    let id = resolve_id(store.entries(), input)?;
    let entry = store
        .get(id)
        .cloned()
        .ok_or_else(|| JournalError::EntryNotFound(input.to_string()))?;

    let removed = store.remove(id);
    log::debug!("Removed {} entries with id {}", removed, id);
    Ok(entry)
}

/// Find the entry named by `input` (full id or unique prefix)
pub fn find_entry<'a, S: PreferenceStore>(store: &'a EntryStore<S>, input: &str) -> Result<&'a Entry> {
    let id = resolve_id(store.entries(), input)?;
    store
        .get(id)
        .ok_or_else(|| JournalError::EntryNotFound(input.to_string()))
}

/// Service for reading and deleting entries of a journal
pub struct EntriesService {
    workspace: Workspace,
}

impl EntriesService {
    pub fn new(workspace: Workspace) -> Self {
        EntriesService { workspace }
    }

    fn open(&self) -> Result<EntryStore<DirectoryPreferences>> {
        let config = self.workspace.load_config()?;
        self.workspace.open_store(&config)
    }

    /// All entries in insertion order
    pub fn list(&self) -> Result<Vec<Entry>> {
        Ok(self.open()?.entries().to_vec())
    }

    pub fn show(&self, input: &str) -> Result<Entry> {
        let store = self.open()?;
        find_entry(&store, input).cloned()
    }

    pub fn delete(&self, input: &str) -> Result<Entry> {
        let mut store = self.open()?;
        delete_entry(&mut store, input)
    }
}
