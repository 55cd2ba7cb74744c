//! Trigger categories

/// Categories offered as suggestions; the store accepts any string
pub const SUGGESTED_CATEGORIES: [&str; 5] =
    ["Work", "Relationships", "Health", "Environment", "Other"];

/// Normalize a user-supplied category.
///
/// Matches against the suggested set case-insensitively and returns the
/// canonical spelling. Anything else is returned trimmed but otherwise as typed.
pub fn normalize_category(input: &str) -> String {
    let trimmed = input.trim();
    SUGGESTED_CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(trimmed))
        .map(|c| c.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}
