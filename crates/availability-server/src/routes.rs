use availability_engine::{
    check_availability, resource_availability, NewResource, Query, Resource, ResourceAvailability,
    ResourceRecord, StoreError,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Success envelope shared by every `/api` route.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Raw availability parameters. `startTime`/`endTime` are accepted as aliases.
#[derive(Debug, Default, Deserialize)]
pub struct AvailabilityParams {
    pub day: Option<String>,
    #[serde(alias = "startTime")]
    pub start: Option<String>,
    #[serde(alias = "endTime")]
    pub end: Option<String>,
}

impl AvailabilityParams {
    fn into_query(self) -> Result<Query, AppError> {
        Ok(Query::parse(
            self.day.as_deref(),
            self.start.as_deref(),
            self.end.as_deref(),
        )?)
    }
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let store_status = match state.store.list_all_resources() {
        Ok(_) => "healthy",
        Err(e) => {
            warn!("Store health check failed: {}", e);
            "unhealthy"
        }
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment.as_str(),
        "services": {
            "store": store_status,
        }
    }))
}

pub async fn list_classrooms(State(state): State<AppState>) -> AppResult<Json<Envelope<Vec<Resource>>>> {
    let resources = state.store.list_all_resources()?;
    Ok(Envelope::ok(resources))
}

pub async fn create_classroom(
    State(state): State<AppState>,
    payload: Result<Json<ResourceRecord>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Envelope<Resource>>)> {
    let Json(record) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let resource = NewResource::try_from(record)?;
    let stored = state.store.insert(resource)?;
    info!(id = %stored.id, name = %stored.name, "created classroom");

    Ok((StatusCode::CREATED, Envelope::ok(stored)))
}

pub async fn delete_classroom(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<Envelope<Resource>>> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let removed = state.store.remove(id)?;
    info!(id = %removed.id, name = %removed.name, "deleted classroom");

    Ok(Envelope::ok(removed))
}

/// `GET /api/classrooms/available?day=Monday&start=10:00&end=11:00`
///
/// Parameters are validated before the store is touched.
pub async fn available_classrooms(
    State(state): State<AppState>,
    params: Result<axum::extract::Query<AvailabilityParams>, QueryRejection>,
) -> AppResult<Json<Envelope<Vec<Resource>>>> {
    let axum::extract::Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let query = params.into_query()?;

    let available = check_availability(state.store.as_ref(), &query)?;
    debug!(?query, count = available.len(), "availability checked");

    Ok(Envelope::ok(available))
}

/// `GET /api/classrooms/{id}/free?day=Monday&start=08:00&end=18:00`
pub async fn classroom_free_slots(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    params: Result<axum::extract::Query<AvailabilityParams>, QueryRejection>,
) -> AppResult<Json<Envelope<ResourceAvailability>>> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let axum::extract::Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let query = params.into_query()?;

    let resource = state
        .store
        .get(id)?
        .ok_or(StoreError::NotFound(id))?;

    Ok(Envelope::ok(resource_availability(&resource, &query)))
}
