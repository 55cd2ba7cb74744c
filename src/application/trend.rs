//! Trend use case

use crate::domain::Trend;
use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStore};
use chrono::{Local, TimeZone};

/// Service computing the recent-level trend
pub struct TrendService<'a, S: KeyValueStore> {
    store: &'a EntryStore<S>,
    window: usize,
}

impl<'a, S: KeyValueStore> TrendService<'a, S> {
    pub fn new(store: &'a EntryStore<S>, window: usize) -> Self {
        TrendService { store, window }
    }

    /// Trend with labels in the local time zone
    pub fn trend(&self) -> Result<Trend> {
        self.trend_in(&Local)
    }

    /// Trend with labels rendered in `tz`
    pub fn trend_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<Trend> {
        let entries = self.store.try_list_all()?;
        Ok(Trend::from_entries(&entries, self.window, tz))
    }
}
