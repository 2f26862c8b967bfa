//! Config management use case

use crate::error::{JournalError, Result};
use crate::infrastructure::preferences::validate_key;
use crate::infrastructure::{Config, LoadPolicy, Workspace};
use std::str::FromStr;

/// Keys that can be read and written through `journalx config`
pub const CONFIG_KEYS: [&str; 3] = ["editor", "slot_key", "load_policy"];

/// Service for managing journal configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "editor" => Ok(config.editor),
            "slot_key" => Ok(config.slot_key),
            "load_policy" => Ok(config.load_policy.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "editor" => config.editor = value.to_string(),
            "slot_key" => {
                validate_key(value)?;
                config.slot_key = value.to_string();
            }
            "load_policy" => {
                config.load_policy = LoadPolicy::from_str(value).map_err(JournalError::Config)?;
            }
            _ => return Err(unknown_key(key)),
        }

        self.workspace.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

fn unknown_key(key: &str) -> JournalError {
    JournalError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
