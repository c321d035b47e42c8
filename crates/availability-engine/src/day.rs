//! Weekday names: case-insensitive on input, canonical full name on output.

use chrono::Weekday;
use serde::Serializer;

use crate::error::{Result, ValidationError};

/// Parse a weekday name.
///
/// Accepts the full English name or its three-letter abbreviation in any case,
/// ignoring surrounding whitespace (`"monday"`, `"MON"`, `" Monday "`).
///
/// # Errors
/// Returns [`ValidationError::InvalidDay`] for anything else.
pub fn parse_weekday(text: &str) -> Result<Weekday> {
    let day = match text.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return Err(ValidationError::InvalidDay(text.to_string())),
    };
    Ok(day)
}

/// Canonical name of a weekday (`Monday`, `Tuesday`, ...).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub(crate) fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*day))
}
