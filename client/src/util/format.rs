//! Date and number formatting for dashboards and reports.
//!
//! Output follows the `en-US` conventions the portal's templates use.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

/// Named date layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// `3/5/2025`
    #[default]
    Short,
    /// `March 5, 2025`
    Long,
    /// `3/5/2025, 2:07:09 PM`
    DateTime,
}

impl DateFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "short" => Some(Self::Short),
            "long" => Some(Self::Long),
            "datetime" => Some(Self::DateTime),
            _ => None,
        }
    }
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`, or `YYYY-MM-DD HH:MM:SS`.
/// Date-only input is placed at midnight.
pub fn parse_date(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
        .or_else(|_| PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")))
        .ok()
        .or_else(|| {
            Date::parse(raw, format_description!("[year]-[month]-[day]"))
                .ok()
                .map(Date::midnight)
        })
}

pub fn format_date(value: PrimitiveDateTime, format: DateFormat) -> String {
    let short = format!("{}/{}/{}", u8::from(value.month()), value.day(), value.year());
    match format {
        DateFormat::Short => short,
        DateFormat::Long => format!("{} {}, {}", value.month(), value.day(), value.year()),
        DateFormat::DateTime => {
            let (hour, meridiem) = match value.hour() {
                0 => (12, "AM"),
                h @ 1..=11 => (h, "AM"),
                12 => (12, "PM"),
                h => (h - 12, "PM"),
            };
            format!(
                "{short}, {hour}:{:02}:{:02} {meridiem}",
                value.minute(),
                value.second()
            )
        }
    }
}

/// Format with a layout name; unknown names fall back to `YYYY-MM-DD HH:MM:SS`.
pub fn format_date_named(value: PrimitiveDateTime, name: &str) -> String {
    match DateFormat::from_name(name) {
        Some(format) => format_date(value, format),
        None => format!(
            "{} {:02}:{:02}:{:02}",
            value.date(),
            value.hour(),
            value.minute(),
            value.second()
        ),
    }
}

/// Fixed-point number, e.g. `format_number(12.3456, 2)` -> `12.35`.
pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Ratio as a percentage, e.g. `format_percentage(0.256, 1)` -> `25.6%`.
pub fn format_percentage(ratio: f64, decimals: usize) -> String {
    format!("{}%", format_number(ratio * 100.0, decimals))
}
