//! Recurring weekly busy periods.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::{Result, ValidationError};
use crate::query::{check_range, parse_window, Query};

/// A busy period that repeats every week on `day`, covering `[start, end)`.
///
/// `start < end` is checked by every constructor, including deserialization,
/// so an `Interval` value is always well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalRecord")]
pub struct Interval {
    #[serde(serialize_with = "crate::day::serialize")]
    day: Weekday,
    start: ClockTime,
    end: ClockTime,
}

/// Untrusted text form of an [`Interval`].
///
/// Accepts `startTime`/`endTime` as aliases for `start`/`end`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalRecord {
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default, alias = "startTime")]
    pub start: Option<String>,
    #[serde(default, alias = "endTime")]
    pub end: Option<String>,
}

impl Interval {
    /// # Errors
    /// Returns [`ValidationError::InvalidRange`] unless `start < end`.
    pub fn new(day: Weekday, start: ClockTime, end: ClockTime) -> Result<Self> {
        check_range(start, end)?;
        Ok(Self { day, start, end })
    }

    /// Build an interval from text, e.g. `Interval::parse("Monday", "09:00", "10:00")`.
    pub fn parse(day: &str, start: &str, end: &str) -> Result<Self> {
        let (day, start, end) = parse_window(Some(day), Some(start), Some(end))?;
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

    /// Half-open overlap with a query window on the same day.
    ///
    /// True iff `query.start < self.end && query.end > self.start`. Touching
    /// endpoints do not overlap, so back-to-back bookings never collide.
    pub fn overlaps(&self, query: &Query) -> bool {
        self.day == query.day() && query.start() < self.end && query.end() > self.start
    }

    /// Minutes shared with the query window, 0 when they do not overlap.
    pub fn overlap_minutes(&self, query: &Query) -> i64 {
        if !self.overlaps(query) {
            return 0;
        }
        let overlap_start = self.start.max(query.start());
        let overlap_end = self.end.min(query.end());
        overlap_start.minutes_until(overlap_end)
    }
}

impl TryFrom<IntervalRecord> for Interval {
    type Error = ValidationError;

    fn try_from(record: IntervalRecord) -> Result<Self> {
        let (day, start, end) = parse_window(
            record.day.as_deref(),
            record.start.as_deref(),
            record.end.as_deref(),
        )?;
        Ok(Self { day, start, end })
    }
}
