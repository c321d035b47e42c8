//! Bookable resources (classrooms) and their untrusted input form.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ValidationError};
use crate::interval::{Interval, IntervalRecord};

/// A room or other bookable asset together with its weekly busy periods.
///
/// Output only; input goes through [`ResourceRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: Uuid,
    /// Display label, e.g. the room number.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Order carries no meaning.
    pub busy_intervals: Vec<Interval>,
}

impl Resource {
    /// Busy intervals falling on `day`.
    pub fn intervals_on(&self, day: Weekday) -> impl Iterator<Item = &Interval> {
        self.busy_intervals.iter().filter(move |i| i.day() == day)
    }
}

/// Untrusted input form of a resource: a request body or one entry of a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default, alias = "roomNumber")]
    pub name: Option<String>,
    /// Optional, unlike the legacy classroom schema where it was required.
    /// Blank values are dropped.
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default, alias = "occupiedSlots")]
    pub busy_intervals: Vec<IntervalRecord>,
}

/// A validated resource that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    pub id: Option<Uuid>,
    pub name: String,
    pub building: Option<String>,
    pub capacity: Option<u32>,
    pub busy_intervals: Vec<Interval>,
}

impl NewResource {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            building: None,
            capacity: None,
            busy_intervals: Vec::new(),
        }
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.busy_intervals.push(interval);
        self
    }

    /// Assign an id (keeping a caller-supplied one) and produce the stored form.
    pub fn into_resource(self) -> Resource {
        Resource {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            building: self.building,
            capacity: self.capacity,
            busy_intervals: self.busy_intervals,
        }
    }
}

impl TryFrom<ResourceRecord> for NewResource {
    type Error = ValidationError;

    /// The name must be non-blank and every interval valid; the first bad
    /// interval is reported.
    fn try_from(record: ResourceRecord) -> Result<Self> {
        let name = record
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::MissingParameter("name"))?;

        let busy_intervals = record
            .busy_intervals
            .into_iter()
            .map(Interval::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: record.id,
            name,
            building: record.building.filter(|b| !b.trim().is_empty()),
            capacity: record.capacity,
            busy_intervals,
        })
    }
}
