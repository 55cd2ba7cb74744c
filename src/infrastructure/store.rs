//! Entry store: the durable entry collection and its read/write/delete contract.
//!
//! # Responsibility
//! - Own the single persisted collection under [`STORAGE_KEY`].
//! - Assign id and timestamp on save; never mutate a stored entry.
//!
//! # Invariants
//! - Every operation is a full read-modify-write of the collection.
//! - Mutations through one store instance are serialized by a writer lock.
//!   Separate processes sharing a backend still race: last writer wins.
//! - `save` prepends, so stored order is newest first.
//! - `list_all` fails closed (logs, returns empty); everything else propagates.
//!
//! # Known defect
//! Ids are the creation time in milliseconds. Two saves in the same
//! millisecond produce the same id; this is logged, not corrected.

use crate::domain::{AnxietyEntry, NewEntry};
use crate::error::{AnxlogError, Result};
use crate::infrastructure::kv::KeyValueStore;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

/// Key the collection is stored under
pub const STORAGE_KEY: &str = "anxiety_entries";

/// Version written into the stored envelope
pub const FORMAT_VERSION: u32 = 1;

/// Source of creation timestamps
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Broadcast after a successful mutation
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Saved(AnxietyEntry),
    Deleted(String),
    Cleared,
}

type Listener = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    entries: &'a [AnxietyEntry],
}

/// Accepted stored layouts: the versioned envelope, or a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCollection {
    Versioned {
        version: u32,
        entries: Vec<AnxietyEntry>,
    },
    Legacy(Vec<AnxietyEntry>),
}

/// Durable access to the entry collection
pub struct EntryStore<S: KeyValueStore> {
    backend: S,
    clock: Box<dyn Clock>,
    write_lock: Mutex<()>,
    listeners: Mutex<Vec<Listener>>,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Create a store over `backend` using wall-clock time
    pub fn new(backend: S) -> Self {
        Self::with_clock(backend, SystemClock)
    }

    /// Create a store with an explicit time source
    pub fn with_clock(backend: S, clock: impl Clock + 'static) -> Self {
        EntryStore {
            backend,
            clock: Box::new(clock),
            write_lock: Mutex::new(()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// All entries in stored order.
    ///
    /// Returns an empty list when nothing is stored, and also when the stored
    /// value cannot be read or parsed; the failure is logged. Use
    /// [`EntryStore::try_list_all`] to tell the two apart.
    pub fn list_all(&self) -> Vec<AnxietyEntry> {
        match self.try_list_all() {
            Ok(entries) => entries,
            Err(err) => {
                error!(
                    "event=entries_load module=store status=error key={} error={}",
                    STORAGE_KEY, err
                );
                Vec::new()
            }
        }
    }

    /// All entries in stored order, propagating read and parse failures
    pub fn try_list_all(&self) -> Result<Vec<AnxietyEntry>> {
        match self.backend.get_item(STORAGE_KEY)? {
            Some(raw) => decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Record a new entry and return it with its assigned id and timestamp.
    ///
    /// The level is not range-checked, but must be finite to stay representable
    /// in the stored form.
    pub fn save(&self, new_entry: NewEntry) -> Result<AnxietyEntry> {
        if !new_entry.level.is_finite() {
            return Err(AnxlogError::InvalidLevel(new_entry.level.to_string()));
        }

        let saved = {
            let _guard = self.lock_writes()?;
            let mut entries = self.try_list_all()?;

            let entry = AnxietyEntry::create(new_entry, self.clock.now_millis());
            if entries.iter().any(|existing| existing.id == entry.id) {
                warn!(
                    "event=entry_save module=store status=id_collision id={}",
                    entry.id
                );
            }

            entries.insert(0, entry.clone());
            self.persist(&entries)?;

            info!(
                "event=entry_save module=store status=ok id={} count={}",
                entry.id,
                entries.len()
            );
            entry
        };

        self.notify(&StoreEvent::Saved(saved.clone()));
        Ok(saved)
    }

    /// Remove the entry with `id`. Missing ids are a no-op.
    ///
    /// Returns whether an entry was removed.
    pub fn delete_by_id(&self, id: &str) -> Result<bool> {
        let removed = {
            let _guard = self.lock_writes()?;
            let mut entries = self.try_list_all()?;

            let before = entries.len();
            entries.retain(|entry| entry.id != id);
            let removed = entries.len() != before;

            self.persist(&entries)?;

            info!(
                "event=entry_delete module=store status=ok id={} removed={} count={}",
                id,
                removed,
                entries.len()
            );
            removed
        };

        if removed {
            self.notify(&StoreEvent::Deleted(id.to_string()));
        }
        Ok(removed)
    }

    /// Drop the persisted collection entirely
    pub fn clear_all(&self) -> Result<()> {
        {
            let _guard = self.lock_writes()?;
            self.backend.remove_item(STORAGE_KEY).map_err(|err| {
                error!(
                    "event=entries_clear module=store status=error error={}",
                    err
                );
                err
            })?;
            info!("event=entries_clear module=store status=ok");
        }

        self.notify(&StoreEvent::Cleared);
        Ok(())
    }

    /// Register a callback run after every successful mutation.
    ///
    /// Listeners run on the mutating thread after the write has finished and
    /// no store lock is held, so they may read from or write to the store.
    pub fn subscribe<F>(&self, listener: F) -> Result<()>
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .map_err(|_| AnxlogError::Storage("listener list lock poisoned".to_string()))?
            .push(Arc::new(listener));
        Ok(())
    }

    fn lock_writes(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| AnxlogError::Storage("writer lock poisoned".to_string()))
    }

    fn persist(&self, entries: &[AnxietyEntry]) -> Result<()> {
        let raw = encode(entries)?;
        self.backend.set_item(STORAGE_KEY, &raw).map_err(|err| {
            error!(
                "event=entries_persist module=store status=error error={}",
                err
            );
            err
        })
    }

    fn notify(&self, event: &StoreEvent) {
        let listeners: Vec<Listener> = match self.listeners.lock() {
            Ok(listeners) => listeners.clone(),
            Err(_) => {
                warn!("event=store_notify module=store status=skipped reason=poisoned");
                return;
            }
        };

        for listener in listeners {
            listener(event);
        }
    }
}

fn encode(entries: &[AnxietyEntry]) -> Result<String> {
    serde_json::to_string(&EnvelopeRef {
        version: FORMAT_VERSION,
        entries,
    })
    .map_err(|e| AnxlogError::Storage(format!("Failed to serialize entries: {}", e)))
}

fn decode(raw: &str) -> Result<Vec<AnxietyEntry>> {
    let stored: StoredCollection =
        serde_json::from_str(raw).map_err(|e| AnxlogError::MalformedData(e.to_string()))?;

    match stored {
        StoredCollection::Versioned { version, .. } if version > FORMAT_VERSION => {
            Err(AnxlogError::MalformedData(format!(
                "unsupported format version {} (newest supported is {})",
                version, FORMAT_VERSION
            )))
        }
        StoredCollection::Versioned { entries, .. } => Ok(entries),
        StoredCollection::Legacy(entries) => Ok(entries),
    }
}
