//! Delete and clear use cases

use crate::error::{AnxlogError, Result};
use crate::infrastructure::{EntryStore, KeyValueStore};
use log::warn;

/// What a clear removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cleared {
    /// A readable collection of this many entries
    Entries(usize),
    /// A stored value that could not be read or parsed
    Unreadable,
}

/// Service for removing entries
pub struct DeleteEntryService<'a, S: KeyValueStore> {
    store: &'a EntryStore<S>,
}

impl<'a, S: KeyValueStore> DeleteEntryService<'a, S> {
    pub fn new(store: &'a EntryStore<S>) -> Self {
        DeleteEntryService { store }
    }

    /// Delete one entry; returns whether it existed
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.store.delete_by_id(id.trim())
    }

    /// Remove every entry. Refuses unless `confirmed`.
    ///
    /// Unreadable stored data can still be cleared, but is reported as such
    /// rather than as an empty collection.
    pub fn clear(&self, confirmed: bool) -> Result<Cleared> {
        let found = match self.store.try_list_all() {
            Ok(entries) => Cleared::Entries(entries.len()),
            Err(err) => {
                warn!(
                    "event=entries_clear module=delete_entry status=unreadable error={}",
                    err
                );
                Cleared::Unreadable
            }
        };

        if !confirmed {
            let what = match &found {
                Cleared::Entries(count) => format!("{} entries", count),
                Cleared::Unreadable => "unreadable stored data".to_string(),
            };
            return Err(AnxlogError::ConfirmationRequired(format!(
                "Refusing to clear {} without confirmation",
                what
            )));
        }

        self.store.clear_all()?;
        Ok(found)
    }
}
