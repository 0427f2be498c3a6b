//! Visit handlers
//!
//! Read-only endpoints for visits.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::parse_uuid;
use crate::domain::entities::{Visit, VisitId};
use crate::error::AppError;
use crate::AppState;

/// Visit as returned by the API
#[derive(Debug, Serialize)]
pub struct VisitResponse {
    pub id: String,
    pub patient_id: String,
    pub date: String,
    pub visit_type: String,
    pub reason: String,
    pub family_history: Option<String>,
    pub created_at: String,
}

impl From<Visit> for VisitResponse {
    fn from(v: Visit) -> Self {
        VisitResponse {
            id: v.id.to_string(),
            patient_id: v.patient_id.to_string(),
            date: v.date.to_rfc3339(),
            visit_type: v.visit_type.to_string(),
            reason: v.reason.to_string(),
            family_history: v.family_history,
            created_at: v.created_at.to_rfc3339(),
        }
    }
}

/// GET /visits
///
/// List all visits.
pub async fn list_visits(
    State(state): State<AppState>,
) -> Result<Json<Vec<VisitResponse>>, AppError> {
    let visits = state.visit_service.get_all(VisitResponse::from).await?;

    Ok(Json(visits))
}

/// GET /visits/:id
///
/// Get a single visit.
pub async fn get_visit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VisitResponse>, AppError> {
    let id = VisitId(parse_uuid(&id)?);

    let visit = state
        .visit_service
        .get_visit(&id, VisitResponse::from)
        .await?;

    Ok(Json(visit))
}
