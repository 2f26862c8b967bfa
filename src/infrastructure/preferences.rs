//! Durable key-value slots
//!
//! A preference store maps a key to one opaque blob. Writing a key replaces
//! the whole blob; there are no partial updates.

use crate::error::{JournalError, Result};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Abstract key-value store holding whole blobs per key
pub trait PreferenceStore {
    /// Read the blob stored under `key`, or `None` if the slot is empty
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the blob stored under `key`
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Clear the slot. Clearing an empty slot is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Check that a key is usable as a slot name
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(JournalError::InvalidKey(key.to_string()))
    }
}

/// Preference store keeping one file per key inside a directory
#[derive(Debug, Clone)]
pub struct DirectoryPreferences {
    dir: PathBuf,
}

impl DirectoryPreferences {
    /// Open a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: PathBuf) -> Self {
        DirectoryPreferences { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl PreferenceStore for DirectoryPreferences {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.slot_path(key)?;

        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JournalError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.slot_path(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        // Write beside the slot and rename over it so readers never see a
        // half-written blob.
        let tmp = self.dir.join(format!(".{}.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(JournalError::Io(e)),
        }
    }
}

/// In-memory preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    slots: HashMap<String, Vec<u8>>,
    fail_writes: bool,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with one slot already filled
    pub fn with_slot(key: &str, value: impl Into<Vec<u8>>) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_string(), value.into());
        store
    }

    /// Make every following `set` fail with an IO error
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        if self.fail_writes {
            return Err(JournalError::Io(io::Error::new(
                io::ErrorKind::Other,
                "preference store is read-only",
            )));
        }
        self.slots.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.slots.remove(key);
        Ok(())
    }
}
