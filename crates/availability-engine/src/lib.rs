//! # availability-engine
//!
//! Weekly room availability for a campus: which classrooms are free on a given
//! weekday between two wall-clock times.
//!
//! Every room carries a set of recurring busy intervals. A room is available
//! for a window when none of its intervals on that day overlap the window,
//! using the half-open rule: `[09:00, 10:00)` and `[10:00, 11:00)` do not
//! overlap, so back-to-back bookings are fine.
//!
//! ## Quick start
//!
//! ```rust
//! use availability_engine::{find_available, Interval, NewResource, Query};
//!
//! let a101 = NewResource::named("A101")
//!     .with_interval(Interval::parse("Monday", "09:00", "10:00").unwrap())
//!     .into_resource();
//! let rooms = vec![a101];
//!
//! let adjacent = Query::parse(Some("monday"), Some("10:00"), Some("11:00")).unwrap();
//! assert_eq!(find_available(&rooms, &adjacent).len(), 1);
//!
//! let overlapping = Query::parse(Some("Monday"), Some("09:30"), Some("10:30")).unwrap();
//! assert!(find_available(&rooms, &overlapping).is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`availability`] — Stable availability filter, per-room busy/free breakdown
//! - [`conflict`] — Intervals overlapping a query window
//! - [`freebusy`] — Free slots inside a query window
//! - [`query`] — Validated `(day, start, end)` queries
//! - [`interval`] — Recurring weekly busy intervals
//! - [`resource`] — Rooms and their untrusted input records
//! - [`store`] — Store contract and in-memory store
//! - [`clock`] — Strict `HH:MM` wall-clock times
//! - [`day`] — Weekday parsing and canonical names
//! - [`error`] — Error types

pub mod availability;
pub mod clock;
pub mod conflict;
pub mod day;
pub mod error;
pub mod freebusy;
pub mod interval;
pub mod query;
pub mod resource;
pub mod store;

pub use availability::{check_availability, find_available, resource_availability, ResourceAvailability};
pub use clock::ClockTime;
pub use conflict::{find_conflicts, Conflict};
pub use error::{StoreError, ValidationError};
pub use freebusy::{find_free_slots, FreeSlot};
pub use interval::{Interval, IntervalRecord};
pub use query::Query;
pub use resource::{NewResource, Resource, ResourceRecord};
pub use store::{InMemoryStore, ResourceStore};
