//! Patient domain entity
//!
//! A person followed by the practice. Patients are created and maintained
//! outside this service; here they are only read.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(pub Uuid);

impl PatientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PatientId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PatientId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A patient record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patient {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub social_security_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Patient {
    /// "First Last", as shown on visit summaries
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
