//! Visit domain entity
//!
//! A single encounter between a patient and a practitioner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::patient::PatientId;

/// Unique identifier for a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisitId(pub Uuid);

impl VisitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VisitId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for VisitId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VisitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the visit took place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitType {
    Home,
    DoctorOffice,
}

impl std::fmt::Display for VisitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisitType::Home => write!(f, "HOME"),
            VisitType::DoctorOffice => write!(f, "DOCTOR_OFFICE"),
        }
    }
}

impl std::str::FromStr for VisitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HOME" => Ok(VisitType::Home),
            "DOCTOR_OFFICE" => Ok(VisitType::DoctorOffice),
            _ => Err(format!("Unknown visit type: {}", s)),
        }
    }
}

/// Why the patient was seen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitReason {
    FirstVisit,
    Recurring,
    Urgent,
}

impl std::fmt::Display for VisitReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisitReason::FirstVisit => write!(f, "FIRST_VISIT"),
            VisitReason::Recurring => write!(f, "RECURRING"),
            VisitReason::Urgent => write!(f, "URGENT"),
        }
    }
}

impl std::str::FromStr for VisitReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FIRST_VISIT" => Ok(VisitReason::FirstVisit),
            "RECURRING" => Ok(VisitReason::Recurring),
            "URGENT" => Ok(VisitReason::Urgent),
            _ => Err(format!("Unknown visit reason: {}", s)),
        }
    }
}

/// A visit record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visit {
    pub id: VisitId,
    pub patient_id: PatientId,
    pub date: DateTime<Utc>,
    pub visit_type: VisitType,
    pub reason: VisitReason,
    pub family_history: Option<String>,
    pub created_at: DateTime<Utc>,
}
