//! Journal workspace on disk
//!
//! ```text
//! <root>/
//!   .journalx/
//!     config.toml
//!     preferences/<slot_key>
//! ```

use crate::error::{JournalError, Result};
use crate::infrastructure::config::JOURNAL_DIR;
use crate::infrastructure::{Config, DirectoryPreferences, EntryStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a journal root
pub const ROOT_ENV: &str = "JOURNALX_ROOT";

#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a new workspace handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Find the journal root: JOURNALX_ROOT first, then walk up from the
    /// current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Ok(Workspace::new(path));
            }
            return Err(JournalError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'journalx init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                JOURNAL_DIR,
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .journalx is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_journal_dir(dir))
            .map(|dir| Workspace::new(dir.to_path_buf()))
            .ok_or_else(|| JournalError::NotJournalDirectory(start.to_path_buf()))
    }

    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    /// Create the .journalx directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let journal_dir = self.root.join(JOURNAL_DIR);

        if journal_dir.exists() {
            return Err(JournalError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(journal_dir.join("preferences"))?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Preference store backing this journal
    pub fn preferences(&self) -> DirectoryPreferences {
        DirectoryPreferences::new(self.root.join(JOURNAL_DIR).join("preferences"))
    }

    /// Scratch file used while composing an entry in the editor
    pub fn draft_path(&self) -> PathBuf {
        self.root.join(JOURNAL_DIR).join("ENTRY_DRAFT")
    }

    /// Open the entry store using the slot and load policy from `config`
    pub fn open_store(&self, config: &Config) -> Result<EntryStore<DirectoryPreferences>> {
        EntryStore::open_with_policy(self.preferences(), config.slot_key.clone(), config.load_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;
    use crate::infrastructure::{LoadPolicy, PreferenceStore};
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_layout() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path().to_path_buf());

        assert!(!ws.is_initialized());
        ws.initialize().unwrap();
        assert!(ws.is_initialized());
        assert!(temp.path().join(".journalx/preferences").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path().to_path_buf());

        ws.initialize().unwrap();
        assert!(matches!(ws.initialize(), Err(JournalError::Config(_))));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        Workspace::new(temp.path().to_path_buf()).initialize().unwrap();

        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = Workspace::discover_from(&nested).unwrap();
        assert_eq!(found.root(), temp.path());
    }

    #[test]
    fn test_discover_from_without_journal() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            Workspace::discover_from(temp.path()),
            Err(JournalError::NotJournalDirectory(_))
        ));
    }

    #[test]
    fn test_open_store_uses_configured_slot() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path().to_path_buf());
        ws.initialize().unwrap();

        let config = Config {
            slot_key: "Diary".to_string(),
            ..Config::default()
        };

        let mut store = ws.open_store(&config).unwrap();
        store.add(Entry::new("note", false, Utc::now()));

        assert!(temp.path().join(".journalx/preferences/Diary").is_file());
        assert!(ws.preferences().get("Reminders").unwrap().is_none());
    }

    #[test]
    fn test_open_store_strict_with_corrupt_slot() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path().to_path_buf());
        ws.initialize().unwrap();
        fs::write(temp.path().join(".journalx/preferences/Reminders"), "{{{").unwrap();

        let strict = Config {
            load_policy: LoadPolicy::Strict,
            ..Config::default()
        };
        assert!(matches!(
            ws.open_store(&strict),
            Err(JournalError::CorruptStore(_))
        ));

        let lenient = ws.open_store(&Config::default()).unwrap();
        assert!(lenient.is_empty());
    }
}
