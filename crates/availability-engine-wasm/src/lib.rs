//! WASM bindings for availability-engine.
//!
//! Lets the browser frontend run the same availability check locally, e.g. to
//! re-filter a classroom list it already fetched. All complex types cross the
//! boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p availability-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir frontend/src/wasm/ \
//!   target/wasm32-unknown-unknown/release/availability_engine_wasm.wasm
//! ```

use availability_engine::availability::resource_availability;
use availability_engine::{find_conflicts, find_free_slots, NewResource, Query, Resource, ResourceRecord};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON in, JSON out
// ---------------------------------------------------------------------------

/// Parse and validate one resource record. Records without an id get a fresh one.
fn parse_resource(record: ResourceRecord) -> Result<Resource, JsValue> {
    NewResource::try_from(record)
        .map(NewResource::into_resource)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Accepts both the stored shape (`name`, `busyIntervals`) and the classroom
/// shape (`roomNumber`, `occupiedSlots`).
fn parse_resources_json(json: &str) -> Result<Vec<Resource>, JsValue> {
    let records: Vec<ResourceRecord> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid resources JSON: {}", e)))?;

    records.into_iter().map(parse_resource).collect()
}

fn parse_resource_json(json: &str) -> Result<Resource, JsValue> {
    let record: ResourceRecord = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid resource JSON: {}", e)))?;

    parse_resource(record)
}

fn parse_query(day: &str, start: &str, end: &str) -> Result<Query, JsValue> {
    Query::parse(Some(day), Some(start), Some(end)).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Filter a list of rooms down to the ones free on `day` between `start` and `end`.
///
/// `resources_json` must be a JSON array of room objects. Times are strict
/// `HH:MM`. Returns a JSON array of the available rooms in input order.
#[wasm_bindgen(js_name = "findAvailable")]
pub fn find_available(resources_json: &str, day: &str, start: &str, end: &str) -> Result<String, JsValue> {
    let query = parse_query(day, start, end)?;
    let resources = parse_resources_json(resources_json)?;

    let available = availability_engine::find_available(&resources, &query);

    to_json(&available)
}

/// Free slots of a single room inside the window.
///
/// Returns a JSON array of `{start, end, durationMinutes}` objects.
#[wasm_bindgen(js_name = "findFreeSlots")]
pub fn free_slots(resource_json: &str, day: &str, start: &str, end: &str) -> Result<String, JsValue> {
    let query = parse_query(day, start, end)?;
    let resource = parse_resource_json(resource_json)?;

    to_json(&find_free_slots(&resource.busy_intervals, &query))
}

/// Busy intervals of a single room that collide with the window.
///
/// Returns a JSON array of `{interval, overlapMinutes}` objects.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn conflicts(resource_json: &str, day: &str, start: &str, end: &str) -> Result<String, JsValue> {
    let query = parse_query(day, start, end)?;
    let resource = parse_resource_json(resource_json)?;

    to_json(&find_conflicts(&resource.busy_intervals, &query))
}

/// Full busy/free breakdown of a single room for the window.
#[wasm_bindgen(js_name = "roomAvailability")]
pub fn room_availability(resource_json: &str, day: &str, start: &str, end: &str) -> Result<String, JsValue> {
    let query = parse_query(day, start, end)?;
    let resource = parse_resource_json(resource_json)?;

    to_json(&resource_availability(&resource, &query))
}
