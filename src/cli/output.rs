//! Output formatting utilities

use crate::domain::{format_level, AnxietyEntry, LevelBand, Trend};
use chrono::{DateTime, Local, TimeZone, Utc};

/// Format a list of entries for display, timestamps in local time
pub fn format_entry_list(entries: &[AnxietyEntry]) -> String {
    format_entry_list_in(entries, &Local)
}

/// Format a list of entries with timestamps rendered in `tz`
pub fn format_entry_list_in<Tz: TimeZone>(entries: &[AnxietyEntry], tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let band = LevelBand::for_level(entry.level);
        let category = if entry.category.is_empty() {
            "-"
        } else {
            entry.category.as_str()
        };

        output.push_str(&format!(
            "{}  {}  {} {:<8}  {}",
            entry.id,
            format_timestamp(entry.timestamp, tz),
            format_level(entry.level),
            band.label(),
            category
        ));
        if !entry.notes.is_empty() {
            output.push_str(&format!("  {}", entry.notes.replace('\n', " ")));
        }
        output.push('\n');
    }
    output
}

/// Format a trend as a text chart, one row per point
pub fn format_trend(trend: &Trend) -> String {
    if trend.is_empty() {
        return "No entries yet. Your recorded anxiety levels will appear here".to_string();
    }

    let mut output = format!("Last {} entries (oldest first):\n", trend.points.len());
    for point in &trend.points {
        let bar_len = (point.level.max(0.0) * 2.0).round() as usize;
        output.push_str(&format!(
            "{:>5}  {:>4}  {}\n",
            point.label,
            format_level(point.level),
            "#".repeat(bar_len)
        ));
    }

    if let (Some(average), Some(peak)) = (trend.average(), trend.peak()) {
        output.push_str(&format!(
            "Average: {:.1}  Peak: {}\n",
            average,
            format_level(peak)
        ));
    }
    output
}

fn format_timestamp<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::<Utc>::from_timestamp_millis(timestamp) {
        Some(utc) => utc.with_timezone(tz).format("%b %d, %I:%M %p").to_string(),
        None => "unknown time".to_string(),
    }
}
