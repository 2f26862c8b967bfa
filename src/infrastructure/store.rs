//! Entry collection store
//!
//! The store keeps the ordered list of entries in memory and mirrors the
//! whole list into a single preference slot after every mutation. Loading
//! and persisting are best-effort: failures are logged and recorded, never
//! returned to the caller of `add` or `remove`.

use crate::domain::Entry;
use crate::error::{JournalError, Result};
use crate::infrastructure::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Slot key the entries are stored under unless configured otherwise
pub const DEFAULT_SLOT_KEY: &str = "Reminders";

/// What happened when the store read its slot at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The slot held a readable list of `count` entries
    Loaded { count: usize },
    /// The slot was empty
    Empty,
    /// The slot could not be read or decoded; the store started empty
    Failed { reason: String },
}

/// How to treat a slot that cannot be read at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Start with an empty journal
    #[default]
    Lenient,
    /// Refuse to open the journal
    Strict,
}

impl FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(LoadPolicy::Lenient),
            "strict" => Ok(LoadPolicy::Strict),
            _ => Err(format!(
                "Invalid load policy: '{}'. Must be one of: lenient, strict",
                s
            )),
        }
    }
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadPolicy::Lenient => write!(f, "lenient"),
            LoadPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Mutation notification delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(Entry),
    Removed { id: Uuid, count: usize },
}

/// Handle returned by [`EntryStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Ordered entry collection mirrored to one durable slot
pub struct EntryStore<S: PreferenceStore> {
    slot: S,
    key: String,
    entries: Vec<Entry>,
    load_outcome: LoadOutcome,
    last_persist_error: Option<String>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: PreferenceStore> EntryStore<S> {
    /// Load the store from `key` in `slot`.
    ///
    /// Never fails: an empty, unreadable or undecodable slot yields an empty
    /// store, and `load_outcome()` tells which case applied.
    pub fn open(slot: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let (entries, load_outcome) = Self::load(&slot, &key);

        EntryStore {
            slot,
            key,
            entries,
            load_outcome,
            last_persist_error: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Load the store, refusing an unreadable slot under `LoadPolicy::Strict`
    pub fn open_with_policy(slot: S, key: impl Into<String>, policy: LoadPolicy) -> Result<Self> {
        let store = Self::open(slot, key);

        match (&store.load_outcome, policy) {
            (LoadOutcome::Failed { reason }, LoadPolicy::Strict) => {
                Err(JournalError::CorruptStore(reason.clone()))
            }
            _ => Ok(store),
        }
    }

    fn load(slot: &S, key: &str) -> (Vec<Entry>, LoadOutcome) {
        let bytes = match slot.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                log::debug!("No saved entries under '{}'", key);
                return (Vec::new(), LoadOutcome::Empty);
            }
            Err(e) => {
                log::warn!("Failed to read saved entries under '{}': {}", key, e);
                return (Vec::new(), LoadOutcome::Failed { reason: e.to_string() });
            }
        };

        match serde_json::from_slice::<Vec<Entry>>(&bytes) {
            Ok(entries) => {
                log::debug!("Loaded {} entries from '{}'", entries.len(), key);
                let count = entries.len();
                (entries, LoadOutcome::Loaded { count })
            }
            Err(e) => {
                log::warn!(
                    "Saved entries under '{}' could not be decoded, starting empty: {}",
                    key,
                    e
                );
                (Vec::new(), LoadOutcome::Failed { reason: e.to_string() })
            }
        }
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Error from the most recent persist, cleared by the next successful one
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut S {
        &mut self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Append an entry and persist the collection
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry.clone());
        self.persist();
        self.notify(&StoreEvent::Added(entry));
    }

    /// Remove every entry with the given id and persist the collection.
    ///
    /// Returns how many entries were removed; an unknown id removes nothing.
    pub fn remove(&mut self, id: Uuid) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let count = before - self.entries.len();

        self.persist();
        if count > 0 {
            self.notify(&StoreEvent::Removed { id, count });
        }
        count
    }

    /// Serialize every entry and overwrite the slot.
    ///
    /// A failure leaves the in-memory entries untouched, so memory and the
    /// slot disagree until the next successful persist.
    pub fn persist(&mut self) {
        let result = serde_json::to_vec(&self.entries)
            .map_err(JournalError::from)
            .and_then(|bytes| self.slot.set(&self.key, &bytes));

        match result {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                log::warn!("Failed to save {} entries to '{}': {}", self.entries.len(), self.key, e);
                self.last_persist_error = Some(e.to_string());
            }
        }
    }

    /// Register a callback invoked after every mutation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl<S: PreferenceStore + fmt::Debug> fmt::Debug for EntryStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryStore")
            .field("slot", &self.slot)
            .field("key", &self.key)
            .field("entries", &self.entries)
            .field("load_outcome", &self.load_outcome)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
