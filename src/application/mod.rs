//! Application layer - Use cases and orchestration

pub mod delete_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod record_entry;
pub mod trend;

pub use delete_entry::{Cleared, DeleteEntryService};
pub use list_entries::ListEntriesService;
pub use manage_config::ConfigService;
pub use record_entry::RecordEntryService;
pub use trend::TrendService;
