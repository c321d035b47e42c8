//! Compute free time slots inside a query window.
//!
//! Takes the intervals on the query's day, clips them to the window, merges
//! overlapping busy periods, then returns the gaps between them.

use serde::Serialize;

use crate::clock::ClockTime;
use crate::interval::Interval;
use crate::query::Query;

/// A free time slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
    pub duration_minutes: i64,
}

/// Merge overlapping or adjacent busy periods on the query's day, clipped to
/// the query window.
///
/// Returns a sorted, non-overlapping list of (start, end) pairs.
pub(crate) fn merge_busy_periods(intervals: &[Interval], query: &Query) -> Vec<(ClockTime, ClockTime)> {
    let mut periods: Vec<(ClockTime, ClockTime)> = intervals
        .iter()
        .filter(|i| i.overlaps(query))
        .map(|i| (i.start().max(query.start()), i.end().min(query.end())))
        .collect();

    if periods.is_empty() {
        return Vec::new();
    }

    periods.sort_unstable();

    let mut merged: Vec<(ClockTime, ClockTime)> = Vec::new();
    for (start, end) in periods {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Find free slots within the query window, sorted by start.
///
/// Intervals on other days are ignored. A window with no busy time yields a
/// single slot covering the whole window.
pub fn find_free_slots(intervals: &[Interval], query: &Query) -> Vec<FreeSlot> {
    let merged = merge_busy_periods(intervals, query);

    let mut free_slots = Vec::new();
    let mut cursor = query.start();

    for (busy_start, busy_end) in &merged {
        if cursor < *busy_start {
            free_slots.push(slot(cursor, *busy_start));
        }
        cursor = cursor.max(*busy_end);
    }

    // Trailing free slot after the last busy period.
    if cursor < query.end() {
        free_slots.push(slot(cursor, query.end()));
    }

    free_slots
}

/// The first free slot of at least `min_duration_minutes`, if any.
pub fn find_first_free_slot(
    intervals: &[Interval],
    query: &Query,
    min_duration_minutes: i64,
) -> Option<FreeSlot> {
    find_free_slots(intervals, query)
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes)
}

fn slot(start: ClockTime, end: ClockTime) -> FreeSlot {
    FreeSlot {
        start,
        end,
        duration_minutes: start.minutes_until(end),
    }
}
