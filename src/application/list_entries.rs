//! List entries use case

use crate::domain::{sorted_by_timestamp, AnxietyEntry, SortOrder};
use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStore};

/// Service for listing entries
pub struct ListEntriesService<'a, S: KeyValueStore> {
    store: &'a EntryStore<S>,
}

impl<'a, S: KeyValueStore> ListEntriesService<'a, S> {
    pub fn new(store: &'a EntryStore<S>) -> Self {
        ListEntriesService { store }
    }

    /// List entries in `order`, optionally filtered by category and capped.
    ///
    /// Reads strictly: an unreadable store is an error, not an empty list.
    pub fn list(
        &self,
        order: SortOrder,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<AnxietyEntry>> {
        let entries = self.store.try_list_all()?;
        let mut entries = sorted_by_timestamp(&entries, order);

        if let Some(category) = category.map(str::trim) {
            entries.retain(|entry| entry.category.eq_ignore_ascii_case(category));
        }

        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        Ok(entries)
    }
}
