use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use service::ServiceError;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Wire shape of every error: `{ "Code": 404, "Description": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub code: u16,
    pub description: String,
}

#[derive(Debug, Error)]
#[error("{status}: {description}")]
pub struct ApiError {
    pub status: StatusCode,
    pub description: String,
}

impl ApiError {
    pub fn new(status: StatusCode, description: impl Into<String>) -> Self {
        Self { status, description: description.into() }
    }

    pub fn bad_request(description: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, description)
    }

    /// `resource` is prefixed with `Not found `.
    pub fn not_found(resource: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("Not found {resource}"))
    }

    pub fn body(&self) -> ErrorResponse {
        ErrorResponse { code: self.status.as_u16(), description: self.description.clone() }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(v) => Self::bad_request(v.0),
            ServiceError::NotFound(resource) => Self::not_found(resource),
            ServiceError::Store(e) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, description = %self.description, "request failed");
        }
        (self.status, Json(self.body())).into_response()
    }
}
