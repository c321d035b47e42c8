//! Detect which busy intervals collide with a query window.
//!
//! Adjacent intervals (where one ends exactly when the window starts, or the
//! window ends exactly when one starts) are NOT conflicts.

use serde::Serialize;

use crate::interval::Interval;
use crate::query::Query;

/// A busy interval that overlaps the requested window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub interval: Interval,
    pub overlap_minutes: i64,
}

/// Find every interval overlapping the query window, in input order.
///
/// An interval `[s, e)` on the query's day overlaps `[qs, qe)` when
/// `qs < e && qe > s`. The overlap is `min(e, qe) - max(s, qs)`.
pub fn find_conflicts(intervals: &[Interval], query: &Query) -> Vec<Conflict> {
    intervals
        .iter()
        .filter(|interval| interval.overlaps(query))
        .map(|interval| Conflict {
            interval: *interval,
            overlap_minutes: interval.overlap_minutes(query),
        })
        .collect()
}

/// True when no interval overlaps the query window.
pub fn is_free(intervals: &[Interval], query: &Query) -> bool {
    !intervals.iter().any(|interval| interval.overlaps(query))
}
