//! Configuration management

use crate::error::{JournalError, Result};
use crate::infrastructure::preferences::validate_key;
use crate::infrastructure::store::{LoadPolicy, DEFAULT_SLOT_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-journal metadata directory
pub const JOURNAL_DIR: &str = ".journalx";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_editor")]
    pub editor: String,
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
    #[serde(default)]
    pub load_policy: LoadPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            editor: default_editor(),
            slot_key: default_slot_key(),
            load_policy: LoadPolicy::default(),
        }
    }
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

/// Detect default editor from environment or system
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

impl Config {
    /// Load config from .journalx/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JournalError::NotJournalDirectory(path.to_path_buf())
            } else {
                JournalError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| JournalError::Config(format!("Failed to parse config.toml: {}", e)))?;
        validate_key(&config.slot_key)?;
        Ok(config)
    }

    /// Save config to .journalx/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(journal_dir.join("config.toml"), contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }
}
