use availability_engine::{StoreError, ValidationError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.kind()),
            AppError::Store(StoreError::Duplicate(_)) => (StatusCode::BAD_REQUEST, "Duplicate"),
            AppError::Store(StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, "NotFound"),
            AppError::Store(StoreError::Unavailable(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "StoreUnavailable")
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BadRequest"),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Store(StoreError::Duplicate(_)) => "Classroom already exists".to_string(),
            AppError::Store(StoreError::NotFound(_)) => "Classroom not found".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();

        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, kind, "request rejected");
        }

        let body = Json(json!({
            "success": false,
            "error": kind,
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
