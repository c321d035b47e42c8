//! HTTP API for the classroom availability lookup.
//!
//! Routes:
//!
//! - `GET /health`
//! - `GET /api/classrooms` — every classroom
//! - `POST /api/classrooms` — add a classroom with its weekly busy slots
//! - `DELETE /api/classrooms/{id}`
//! - `GET /api/classrooms/available?day=&start=&end=` — classrooms free for the window
//! - `GET /api/classrooms/{id}/free?day=&start=&end=` — busy/free breakdown of one room
//!
//! Responses use the `{"success": true, "data": ...}` envelope; failures carry
//! `{"success": false, "error": <kind>, "message": <text>}`.

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{delete, get},
    Router,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod state;

use state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let classrooms = Router::new()
        .route(
            "/",
            get(routes::list_classrooms).post(routes::create_classroom),
        )
        .route("/available", get(routes::available_classrooms))
        .route("/{id}", delete(routes::delete_classroom))
        .route("/{id}/free", get(routes::classroom_free_slots));

    Router::new()
        .route("/health", get(routes::health))
        .nest("/api/classrooms", classrooms)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
