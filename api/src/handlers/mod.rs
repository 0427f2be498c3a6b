//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Each handler hands the lookup
//! service a presenter that builds its response body.

pub mod patients;
pub mod visits;

pub use patients::{get_patient, list_patients};
pub use visits::{get_visit, list_visits};

use uuid::Uuid;

use crate::error::DomainError;

/// Parse a path segment as a UUID
fn parse_uuid(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw)
        .map_err(|_| DomainError::InvalidArgument(format!("Invalid id: {}", raw)))
}
