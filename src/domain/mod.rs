//! Domain layer - Entry model and the rules around it

pub mod category;
pub mod entry;
pub mod level;
pub mod trend;

pub use category::{normalize_category, SUGGESTED_CATEGORIES};
pub use entry::{sorted_by_timestamp, AnxietyEntry, NewEntry, SortOrder};
pub use level::{format_level, parse_level, LevelBand};
pub use trend::{Trend, TrendPoint, DEFAULT_TREND_WINDOW};
