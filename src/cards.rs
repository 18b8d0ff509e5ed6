//! Pure presentation rules for pick cards: confidence tiering, date
//! formatting and direction styling. Nothing here touches a terminal, so the
//! tier-boundary and formatting logic is testable on its own.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use ratatui::style::Color;

use crate::state::PickDirection;

/// Classification band for a confidence score, used only for badge coloring.
/// The badge text always shows the raw number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// `c >= 80` is High, `65 <= c < 80` is Medium, everything below is Low.
    pub fn classify(confidence: f64) -> Self {
        if confidence >= 80.0 {
            ConfidenceTier::High
        } else if confidence >= 65.0 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

}

/// Styling table passed into the render functions, instead of module-level
/// color constants.
#[derive(Debug, Clone, Copy)]
pub struct CardTheme {
    pub tier_high: Color,
    pub tier_medium: Color,
    pub tier_low: Color,
    pub over: Color,
    pub under: Color,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self {
            tier_high: Color::Green,
            tier_medium: Color::Yellow,
            tier_low: Color::Red,
            over: Color::Green,
            under: Color::Red,
        }
    }
}

pub fn tier_color(theme: &CardTheme, tier: ConfidenceTier) -> Color {
    match tier {
        ConfidenceTier::High => theme.tier_high,
        ConfidenceTier::Medium => theme.tier_medium,
        ConfidenceTier::Low => theme.tier_low,
    }
}

/// Badge text, same for every tier: the raw score as given, no rounding.
pub fn confidence_badge(confidence: f64) -> String {
    format!("{confidence}% Confidence")
}

pub fn direction_color(theme: &CardTheme, direction: PickDirection) -> Color {
    match direction {
        PickDirection::Over => theme.over,
        PickDirection::Under => theme.under,
    }
}

/// Button text for the recommended side, e.g. `▲ OVER 20.5`. Purely a
/// function of the `pick` field; no cross-check against the projection.
pub fn direction_label(direction: PickDirection, line: f64) -> String {
    match direction {
        PickDirection::Over => format!("▲ OVER {line}"),
        PickDirection::Under => format!("▼ UNDER {line}"),
    }
}

/// Date line for a card. Absent, empty or unparseable `game_time` produces an
/// empty string; a parseable value renders only the date portion (weekday and
/// month abbreviations plus day number) in the local timezone. The time of
/// day is intentionally discarded.
pub fn format_game_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_game_time(trimmed) {
        Some(date) => date.format("%a, %b %-d").to_string(),
        None => String::new(),
    }
}

fn parse_game_time(raw: &str) -> Option<NaiveDate> {
    // The generator writes RFC 3339 with an offset; everything else is a
    // best-effort ladder for hand-edited documents.
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
