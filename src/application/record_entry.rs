//! Record entry use case

use crate::domain::{normalize_category, AnxietyEntry, NewEntry};
use crate::error::{AnxlogError, Result};
use crate::infrastructure::{EntryStore, KeyValueStore};

/// Service for recording new entries
pub struct RecordEntryService<'a, S: KeyValueStore> {
    store: &'a EntryStore<S>,
}

impl<'a, S: KeyValueStore> RecordEntryService<'a, S> {
    pub fn new(store: &'a EntryStore<S>) -> Self {
        RecordEntryService { store }
    }

    /// Clean up user input and save it.
    ///
    /// Notes are trimmed and the category normalized. An entry with level 0,
    /// no category and no notes is refused.
    pub fn record(&self, level: f64, category: &str, notes: &str) -> Result<AnxietyEntry> {
        let new_entry = NewEntry::new(level, normalize_category(category), notes.trim());

        if new_entry.is_blank() {
            return Err(AnxlogError::EmptyEntry);
        }

        self.store.save(new_entry)
    }
}
