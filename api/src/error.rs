//! Unified error types for the CGM API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core lookup errors, returned by ports and services
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::Resource;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{resource} {id} not found")]
    ResourceNotFound { resource: Resource, id: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(resource: Resource, id: impl ToString) -> Self {
        DomainError::ResourceNotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            AppError::Domain(e @ DomainError::ResourceNotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Not found", Some(e.to_string()))
            }
            AppError::Domain(DomainError::InvalidArgument(msg)) => (
                StatusCode::BAD_REQUEST,
                "Invalid argument",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.status_and_body();

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
