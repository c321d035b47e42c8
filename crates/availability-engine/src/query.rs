//! Availability queries: a weekday plus a half-open `[start, end)` window.

use chrono::Weekday;
use serde::Serialize;

use crate::clock::ClockTime;
use crate::day::parse_weekday;
use crate::error::{Result, ValidationError};

/// A validated availability check. `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Query {
    #[serde(serialize_with = "crate::day::serialize")]
    day: Weekday,
    start: ClockTime,
    end: ClockTime,
}

impl Query {
    /// # Errors
    /// Returns [`ValidationError::InvalidRange`] unless `start < end`.
    pub fn new(day: Weekday, start: ClockTime, end: ClockTime) -> Result<Self> {
        check_range(start, end)?;
        Ok(Self { day, start, end })
    }

    /// Validate raw text parameters, as they arrive from a query string or a
    /// command line.
    ///
    /// Checks run in a fixed order and stop at the first failure: all three
    /// present and non-blank, a recognized weekday, strict `HH:MM` times, then
    /// `start < end`.
    pub fn parse(day: Option<&str>, start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let (day, start, end) = parse_window(day, start, end)?;
        Ok(Self { day, start, end })
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        self.start.minutes_until(self.end)
    }
}

/// Shared validation for anything shaped like `(day, start, end)` text.
pub(crate) fn parse_window(
    day: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Weekday, ClockTime, ClockTime)> {
    let day = required("day", day)?;
    let start = required("start", start)?;
    let end = required("end", end)?;

    let day = parse_weekday(day)?;
    let start = ClockTime::parse(start)?;
    let end = ClockTime::parse(end)?;
    check_range(start, end)?;

    Ok((day, start, end))
}

pub(crate) fn check_range(start: ClockTime, end: ClockTime) -> Result<()> {
    if start >= end {
        return Err(ValidationError::InvalidRange { start, end });
    }
    Ok(())
}

fn required<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ValidationError::MissingParameter(name))
}
