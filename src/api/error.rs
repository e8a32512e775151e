use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;

use super::models::ErrorResponse;

/// Failures surfaced to HTTP clients. Upstream failures never land here.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    UnknownRoute(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Not found")]
    NotFound,
    #[error("Failed to fetch sports data")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownRoute(_) | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            error!("Error in sports API: {:?}", cause);
        }
        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
