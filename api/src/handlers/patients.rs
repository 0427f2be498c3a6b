//! Patient handlers
//!
//! Read-only endpoints for patients.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::parse_uuid;
use crate::domain::entities::{Patient, PatientId};
use crate::error::AppError;
use crate::AppState;

/// Patient as returned by the API
#[derive(Debug, Serialize)]
pub struct PatientResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub birth_date: String,
    pub social_security_number: Option<String>,
    pub created_at: String,
}

impl From<Patient> for PatientResponse {
    fn from(p: Patient) -> Self {
        PatientResponse {
            full_name: p.full_name(),
            id: p.id.to_string(),
            first_name: p.first_name,
            last_name: p.last_name,
            birth_date: p.birth_date.to_string(),
            social_security_number: p.social_security_number,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// GET /patients
///
/// List all patients.
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientResponse>>, AppError> {
    let patients = state
        .patient_service
        .get_all(PatientResponse::from)
        .await?;

    Ok(Json(patients))
}

/// GET /patients/:id
///
/// Get a single patient.
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientResponse>, AppError> {
    let id = PatientId(parse_uuid(&id)?);

    let patient = state
        .patient_service
        .get_patient(&id, PatientResponse::from)
        .await?;

    Ok(Json(patient))
}
