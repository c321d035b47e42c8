//! Router tests driven through `tower::ServiceExt::oneshot` against an in-memory store.

use std::io;
use std::sync::{Arc, Mutex};

use availability_engine::{InMemoryStore, Interval, NewResource, Resource, ResourceStore, StoreError};
use availability_server::{config::ServerConfig, create_router, state::AppState};
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn config() -> ServerConfig {
    ServerConfig::from_vars(|_| None).unwrap()
}

fn app_with(store: Arc<dyn ResourceStore>) -> Router {
    create_router(AppState::new(store, config()))
}

/// A store holding A101 (busy Monday 09:00-10:00 and 11:00-12:00) and B202 (never busy).
fn seeded() -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(
        InMemoryStore::seeded([
            NewResource::named("A101")
                .with_interval(Interval::parse("Monday", "09:00", "10:00").unwrap())
                .with_interval(Interval::parse("Monday", "11:00", "12:00").unwrap()),
            NewResource::named("B202"),
        ])
        .unwrap(),
    );
    (app_with(store.clone()), store)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

fn names(body: &Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect()
}

struct DownStore;

impl ResourceStore for DownStore {
    fn list_all_resources(&self) -> Result<Vec<Resource>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
    fn get(&self, _id: Uuid) -> Result<Option<Resource>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
    fn insert(&self, _resource: NewResource) -> Result<Resource, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
    fn remove(&self, _id: Uuid) -> Result<Resource, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Availability
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn adjacent_slot_is_available() {
    let (app, _) = seeded();
    let (status, body) = get(&app, "/api/classrooms/available?day=Monday&start=10:00&end=11:00").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(names(&body), vec!["A101", "B202"]);
}

#[tokio::test]
async fn overlapping_slot_is_not_available() {
    let (app, _) = seeded();
    let (status, body) = get(&app, "/api/classrooms/available?day=Monday&start=09:30&end=10:30").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["B202"]);
}

#[tokio::test]
async fn other_day_is_available() {
    let (app, _) = seeded();
    let (_, body) = get(&app, "/api/classrooms/available?day=Tuesday&start=09:00&end=10:00").await;
    assert_eq!(names(&body), vec!["A101", "B202"]);
}

#[tokio::test]
async fn start_time_and_end_time_params_are_accepted() {
    let (app, _) = seeded();
    let (status, body) = get(
        &app,
        "/api/classrooms/available?day=monday&startTime=11:30&endTime=12:30",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["B202"]);
}

#[tokio::test]
async fn missing_parameter_is_400() {
    let (app, _) = seeded();
    let (status, body) = get(&app, "/api/classrooms/available?day=Monday&startTime=10:00").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "MissingParameter");
}

#[tokio::test]
async fn unpadded_time_is_400() {
    let (app, _) = seeded();
    let (status, body) = get(&app, "/api/classrooms/available?day=Monday&start=9:00&end=10:00").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidTimeFormat");
    assert!(body["message"].as_str().unwrap().contains("HH:MM"));
}

#[tokio::test]
async fn inverted_range_is_400() {
    let (app, _) = seeded();
    let (status, body) = get(&app, "/api/classrooms/available?day=Monday&start=12:00&end=11:00").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidRange");
}

#[tokio::test]
async fn validation_happens_before_store_read() {
    let app = app_with(Arc::new(DownStore));
    let (status, body) = get(&app, "/api/classrooms/available?day=Monday&start=12:00&end=11:00").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidRange");
}

#[tokio::test]
async fn store_failure_is_503() {
    let app = app_with(Arc::new(DownStore));
    let (status, body) = get(&app, "/api/classrooms/available?day=Monday&start=10:00&end=11:00").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "StoreUnavailable");
}

// ─────────────────────────────────────────────────────────────────────────────
// Classroom CRUD
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_all_classrooms() {
    let (app, _) = seeded();
    let (status, body) = get(&app, "/api/classrooms").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["A101", "B202"]);
    assert_eq!(body["data"][0]["busyIntervals"][1]["start"], "11:00");
}

#[tokio::test]
async fn create_then_query() {
    let (app, _) = seeded();
    let (status, body) = post_json(
        &app,
        "/api/classrooms",
        json!({
            "roomNumber": "C303",
            "building": "Block C",
            "capacity": 40,
            "occupiedSlots": [{"day": "Monday", "startTime": "10:00", "endTime": "11:00"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "C303");
    assert_eq!(body["data"]["capacity"], 40);
    assert!(body["data"]["id"].is_string());

    let (_, body) = get(&app, "/api/classrooms/available?day=Monday&start=10:30&end=10:45").await;
    assert_eq!(names(&body), vec!["A101", "B202"]);
}

#[tokio::test]
async fn duplicate_classroom_is_400() {
    let (app, _) = seeded();
    let (status, body) = post_json(&app, "/api/classrooms", json!({"name": "A101"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Classroom already exists");
}

#[tokio::test]
async fn invalid_interval_is_never_stored() {
    let (app, store) = seeded();
    let (status, body) = post_json(
        &app,
        "/api/classrooms",
        json!({"name": "D404", "busyIntervals": [{"day": "Monday", "start": "11:00", "end": "10:00"}]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidRange");
    assert_eq!(store.list_all_resources().unwrap().len(), 2);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (app, _) = seeded();
    let request = Request::post("/api/classrooms")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn delete_removes_classroom() {
    let (app, store) = seeded();
    let id = store.list_all_resources().unwrap()[0].id;

    let (status, body) = delete(&app, &format!("/api/classrooms/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "A101");

    let (status, body) = delete(&app, &format!("/api/classrooms/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn delete_with_bad_id_is_400() {
    let (app, _) = seeded();
    let (status, body) = delete(&app, "/api/classrooms/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
}

// ─────────────────────────────────────────────────────────────────────────────
// Free slots for one room
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn free_slots_for_room() {
    let (app, store) = seeded();
    let id = store.list_all_resources().unwrap()[0].id;

    let (status, body) = get(
        &app,
        &format!("/api/classrooms/{id}/free?day=Monday&start=08:00&end=13:00"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["name"], "A101");
    assert_eq!(data["available"], false);

    let free: Vec<(&str, &str)> = data["free"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["start"].as_str().unwrap(), s["end"].as_str().unwrap()))
        .collect();
    assert_eq!(free, vec![("08:00", "09:00"), ("10:00", "11:00"), ("12:00", "13:00")]);
}

#[tokio::test]
async fn free_slots_for_unknown_room_is_404() {
    let (app, _) = seeded();
    let id = Uuid::new_v4();
    let (status, _) = get(
        &app,
        &format!("/api/classrooms/{id}/free?day=Monday&start=08:00&end=13:00"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ─────────────────────────────────────────────────────────────────────────────
// Health
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_store_status() {
    let (app, _) = seeded();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["services"]["store"], "healthy");
    assert_eq!(body["environment"], "development");

    let app = app_with(Arc::new(DownStore));
    let (_, body) = get(&app, "/health").await;
    assert_eq!(body["services"]["store"], "unhealthy");
}

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn unhealthy_store_is_logged_as_warning() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = app_with(Arc::new(DownStore));
    let (status, _) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let output = logs.contents();
    assert!(output.contains("WARN"), "no warning logged: {output}");
    assert!(output.contains("Store health check failed: Store unavailable"), "{output}");
}
