//! Wall-clock times with minute granularity.
//!
//! A [`ClockTime`] is stored as minutes since midnight. Its text form is the
//! strict, zero-padded 24-hour `HH:MM`, so comparing two `ClockTime`s gives the
//! same answer as comparing their text lexically.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    pub const LAST_MINUTE: ClockTime = ClockTime(MINUTES_PER_DAY - 1);

    /// Build a time from hour and minute, or `None` if either is out of range.
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(u16::from(hour) * 60 + u16::from(minute)))
        } else {
            None
        }
    }

    /// Build a time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Parse strict `HH:MM` text.
    ///
    /// Exactly five bytes: two digits, a colon, two digits. Hours `00`-`23`,
    /// minutes `00`-`59`. `9:00`, `09:5`, `24:00` and `09:00:00` are rejected.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidTimeFormat`] carrying the original text.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || ValidationError::InvalidTimeFormat(text.to_string());

        let bytes = text.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }

        let digit = |b: u8| b.is_ascii_digit().then(|| b - b'0');
        match (digit(bytes[0]), digit(bytes[1]), digit(bytes[3]), digit(bytes[4])) {
            (Some(h1), Some(h2), Some(m1), Some(m2)) => {
                Self::from_hm(h1 * 10 + h2, m1 * 10 + m2).ok_or_else(invalid)
            }
            _ => Err(invalid()),
        }
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Signed number of minutes from `self` to `later`.
    pub fn minutes_until(self, later: ClockTime) -> i64 {
        i64::from(later.0) - i64::from(self.0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}
