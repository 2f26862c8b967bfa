//! Domain layer - Journal entries and the values they are built from

pub mod date_ref;
pub mod entry;
pub mod prompts;

pub use date_ref::{DateReference, WeekdayOffset};
pub use entry::{Entry, EntryDraft, DRAFT_PLACEHOLDER};
