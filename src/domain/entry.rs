//! Anxiety entry model and ordering

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One recorded anxiety entry.
///
/// Field names are part of the stored format and must not be renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnxietyEntry {
    pub id: String,
    pub level: f64,
    pub category: String,
    pub notes: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// The user-supplied part of an entry; id and timestamp are assigned on save.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub level: f64,
    pub category: String,
    pub notes: String,
}

impl NewEntry {
    pub fn new(level: f64, category: impl Into<String>, notes: impl Into<String>) -> Self {
        NewEntry {
            level,
            category: category.into(),
            notes: notes.into(),
        }
    }

    /// True when the entry carries no information at all
    pub fn is_blank(&self) -> bool {
        self.level == 0.0 && self.category.trim().is_empty() && self.notes.trim().is_empty()
    }
}

impl AnxietyEntry {
    /// Build a stored entry from user input and a creation time.
    ///
    /// The id is the decimal creation time, so two entries created in the
    /// same millisecond get the same id.
    pub fn create(new_entry: NewEntry, timestamp: i64) -> Self {
        AnxietyEntry {
            id: timestamp.to_string(),
            level: new_entry.level,
            category: new_entry.category,
            notes: new_entry.notes,
            timestamp,
        }
    }
}

/// Display order for a listed collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Order as persisted (newest saved first)
    #[default]
    Stored,
    /// Descending by timestamp
    Newest,
    /// Ascending by timestamp
    Oldest,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stored" => Ok(SortOrder::Stored),
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            _ => Err(format!(
                "Invalid order: '{}'. Valid orders: stored, newest, oldest",
                s
            )),
        }
    }
}

/// Return a copy of `entries` in the requested order; the input is untouched.
///
/// The sort is stable, so entries sharing a timestamp keep their stored order.
pub fn sorted_by_timestamp(entries: &[AnxietyEntry], order: SortOrder) -> Vec<AnxietyEntry> {
    let mut sorted = entries.to_vec();
    match order {
        SortOrder::Stored => {}
        SortOrder::Newest => sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortOrder::Oldest => sorted.sort_by_key(|entry| entry.timestamp),
    }
    sorted
}
