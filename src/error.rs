//! Error types for journalx

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for journalx
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Not a journalx directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Ambiguous entry id '{prefix}' matches {matches} entries")]
    AmbiguousId { prefix: String, matches: usize },

    #[error("Entry is empty, nothing saved")]
    EmptyEntry,

    #[error("Invalid preference key: '{0}'")]
    InvalidKey(String),

    #[error("Stored entries could not be read: {0}")]
    CorruptStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::NotJournalDirectory(_) => 2,
            JournalError::InvalidDate(_) => 3,
            JournalError::EntryNotFound(_) | JournalError::AmbiguousId { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::NotJournalDirectory(path) => {
                format!(
                    "Not a journalx directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'journalx init' in this directory to start a journal\n\
                    • Navigate to an existing journal directory\n\
                    • Set JOURNALX_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JournalError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: DD-MM-YYYY or YYYY-MM-DD\n\n\
                    Examples:\n\
                    journalx new --date yesterday \"...\"\n\
                    journalx new --date 2025-01-15 \"...\"",
                    input
                )
            }
            JournalError::EntryNotFound(id) => {
                format!(
                    "No entry matches id: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'journalx list' to see entry ids\n\
                    • A unique prefix of the id is enough (e.g., the first 8 characters)",
                    id
                )
            }
            JournalError::AmbiguousId { prefix, matches } => {
                format!(
                    "Id prefix '{}' matches {} entries\n\n\
                    Suggestions:\n\
                    • Type more characters of the id\n\
                    • Use 'journalx show <id>' with the full id from 'journalx list'",
                    prefix, matches
                )
            }
            JournalError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: journalx config editor 'vim'\n\
                    • Pass the text directly: journalx new \"my entry\"",
                    msg
                )
            }
            JournalError::Config(msg) if msg.contains("load policy") => {
                format!(
                    "{}\n\n\
                    Valid load policies: lenient, strict\n\
                    Example: journalx config load_policy strict",
                    msg
                )
            }
            JournalError::CorruptStore(reason) => {
                format!(
                    "Stored entries could not be read: {}\n\n\
                    The journal is configured with load_policy = strict.\n\
                    Switch to 'journalx config load_policy lenient' to start from an empty journal.",
                    reason
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;
