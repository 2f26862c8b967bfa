//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod preferences;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use editor::EditorSession;
pub use preferences::{DirectoryPreferences, MemoryPreferences, PreferenceStore};
pub use store::{EntryStore, LoadOutcome, LoadPolicy, StoreEvent, SubscriptionId, DEFAULT_SLOT_KEY};
pub use workspace::Workspace;
