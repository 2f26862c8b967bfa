//! journalx - Personal journal kept in a local preference store
//!
//! Entries (text, bookmark flag, date) live in an ordered in-memory list
//! that is written whole to a single key-value slot after every change and
//! read back on startup.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Entry, EntryDraft};
pub use error::JournalError;
pub use infrastructure::{EntryStore, LoadOutcome, PreferenceStore};
