// HTTP response utilities for JSON page views
use crate::error::DashboardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Body shape shared by every error response.
pub fn error_body(message: impl Into<String>) -> Json<serde_json::Value> {
    Json(json!({ "error": message.into() }))
}

/// Serialize a page view with a 200 status.
pub fn json_view<T: Serialize>(view: T) -> Response {
    (StatusCode::OK, Json(view)).into_response()
}

pub fn not_found(path: &str) -> Response {
    (StatusCode::NOT_FOUND, error_body(format!("page not found: {}", path))).into_response()
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::NotFound { .. } => StatusCode::NOT_FOUND,
            DashboardError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, error_body(self.to_string())).into_response()
    }
}
