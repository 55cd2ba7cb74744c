//! Anxiety level presets, parsing and severity bands

use std::fmt;

/// Lowest level the scale allows
pub const MIN_LEVEL: f64 = 0.0;
/// Highest level the scale allows
pub const MAX_LEVEL: f64 = 5.0;
/// Granularity of the scale
pub const LEVEL_STEP: f64 = 0.5;

/// Named quick-pick levels
pub const PRESETS: [(&str, f64); 5] = [
    ("none", 0.0),
    ("mild", 1.0),
    ("moderate", 2.5),
    ("high", 4.0),
    ("extreme", 5.0),
];

/// Parse a level from a preset name or a number.
///
/// Numbers must lie in 0..=5 and be a multiple of 0.5.
pub fn parse_level(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if let Some((_, value)) = PRESETS.iter().find(|(name, _)| *name == lower) {
        return Ok(*value);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| format!("not a number or preset: {}", trimmed))?;

    if !value.is_finite() || !(MIN_LEVEL..=MAX_LEVEL).contains(&value) {
        return Err(format!("{} is outside {}..={}", trimmed, MIN_LEVEL, MAX_LEVEL));
    }

    if (value / LEVEL_STEP).fract() != 0.0 {
        return Err(format!("{} is not a multiple of {}", trimmed, LEVEL_STEP));
    }

    Ok(value)
}

/// Format a level the way it is displayed everywhere (one decimal)
pub fn format_level(level: f64) -> String {
    format!("{:.1}", level)
}

/// Severity band of a level, used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelBand {
    Low,
    Moderate,
    High,
    Severe,
}

impl LevelBand {
    pub fn for_level(level: f64) -> Self {
        if level <= 1.0 {
            LevelBand::Low
        } else if level <= 2.5 {
            LevelBand::Moderate
        } else if level <= 4.0 {
            LevelBand::High
        } else {
            LevelBand::Severe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LevelBand::Low => "low",
            LevelBand::Moderate => "moderate",
            LevelBand::High => "high",
            LevelBand::Severe => "severe",
        }
    }
}

impl fmt::Display for LevelBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
