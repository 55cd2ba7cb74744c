//! Recent-level trend computed from a listed collection

use crate::domain::entry::{sorted_by_timestamp, AnxietyEntry, SortOrder};
use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Default number of entries shown in a trend
pub const DEFAULT_TREND_WINDOW: usize = 7;

/// One point of the trend line
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// Short `M/D` label for the entry's day
    pub label: String,
    pub level: f64,
    pub timestamp: i64,
}

/// The most recent entries, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trend {
    pub points: Vec<TrendPoint>,
}

impl Trend {
    /// Build a trend from the last `window` entries by timestamp.
    ///
    /// Labels are rendered in `tz`. Entries whose timestamp cannot be
    /// represented get an empty label.
    pub fn from_entries<Tz: TimeZone>(entries: &[AnxietyEntry], window: usize, tz: &Tz) -> Self {
        let sorted = sorted_by_timestamp(entries, SortOrder::Oldest);
        let skip = sorted.len().saturating_sub(window);

        let points = sorted
            .into_iter()
            .skip(skip)
            .map(|entry| TrendPoint {
                label: short_label(entry.timestamp, tz),
                level: entry.level,
                timestamp: entry.timestamp,
            })
            .collect();

        Trend { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean level across the points, `None` when empty
    pub fn average(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let total: f64 = self.points.iter().map(|p| p.level).sum();
        Some(total / self.points.len() as f64)
    }

    /// Highest level across the points
    pub fn peak(&self) -> Option<f64> {
        self.points.iter().map(|p| p.level).reduce(f64::max)
    }
}

fn short_label<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp) {
        Some(utc) => {
            let local = utc.with_timezone(tz);
            format!("{}/{}", local.month(), local.day())
        }
        None => String::new(),
    }
}
