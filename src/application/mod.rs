//! Application layer - Use cases and orchestration

pub mod entries;
pub mod init;
pub mod lookup;
pub mod manage_config;
pub mod new_entry;
pub mod reflect;

pub use entries::EntriesService;
pub use manage_config::ConfigService;
pub use new_entry::{NewEntryRequest, NewEntryService};
