//! Which resources are free for a given weekday and time window.
//!
//! This is the core of the classroom lookup: a stable filter over the full
//! resource set using the half-open overlap rule from [`Interval::overlaps`].
//! It is a pure read; callers load the resources however they like, or hand
//! over a [`ResourceStore`] and let [`check_availability`] do the load.
//!
//! [`Interval::overlaps`]: crate::interval::Interval::overlaps

use serde::Serialize;
use uuid::Uuid;

use crate::clock::ClockTime;
use crate::conflict::{self, Conflict};
use crate::error::StoreError;
use crate::freebusy::{self, FreeSlot};
use crate::query::Query;
use crate::resource::Resource;
use crate::store::ResourceStore;

/// Return every resource with no busy interval overlapping the query window.
///
/// Resources with nothing booked on the query's day are always included.
/// The output keeps the input order.
pub fn find_available<'a>(resources: &'a [Resource], query: &Query) -> Vec<&'a Resource> {
    resources
        .iter()
        .filter(|resource| conflict::is_free(&resource.busy_intervals, query))
        .collect()
}

/// Load the full resource set from `store` and filter it with [`find_available`].
///
/// # Errors
/// Store failures are returned unchanged.
pub fn check_availability<S>(store: &S, query: &Query) -> Result<Vec<Resource>, StoreError>
where
    S: ResourceStore + ?Sized,
{
    let mut resources = store.list_all_resources()?;
    resources.retain(|resource| conflict::is_free(&resource.busy_intervals, query));
    Ok(resources)
}

/// A merged busy block inside the query window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusyBlock {
    pub start: ClockTime,
    pub end: ClockTime,
}

/// Busy/free breakdown of one resource for one query window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAvailability {
    pub resource_id: Uuid,
    pub name: String,
    pub query: Query,
    /// True when the whole window is free.
    pub available: bool,
    /// Merged busy blocks (sorted by start, non-overlapping).
    pub busy: Vec<BusyBlock>,
    /// Gaps between busy blocks within the window.
    pub free: Vec<FreeSlot>,
    /// The raw intervals responsible for the busy blocks.
    pub conflicts: Vec<Conflict>,
}

/// Break one resource's day down into busy blocks, free slots and conflicts.
pub fn resource_availability(resource: &Resource, query: &Query) -> ResourceAvailability {
    let intervals = &resource.busy_intervals;

    let busy: Vec<BusyBlock> = freebusy::merge_busy_periods(intervals, query)
        .into_iter()
        .map(|(start, end)| BusyBlock { start, end })
        .collect();

    ResourceAvailability {
        resource_id: resource.id,
        name: resource.name.clone(),
        query: *query,
        available: busy.is_empty(),
        busy,
        free: freebusy::find_free_slots(intervals, query),
        conflicts: conflict::find_conflicts(intervals, query),
    }
}
