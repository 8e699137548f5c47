use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use comfort_core::DashboardError;
use serde_json::json;

/// Error returned to HTTP callers as `{ "error": message }`.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match &err {
            DashboardError::MissingApiKey => {
                tracing::error!("OpenWeather API key is not configured");
            }
            DashboardError::Upstream(cause) => {
                tracing::error!("weather dashboard failed: {cause:#}");
            }
        }
        Self::internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
