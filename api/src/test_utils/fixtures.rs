//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::entities::{Patient, PatientId, Visit, VisitId, VisitReason, VisitType};

/// Create a test patient with default values
pub fn test_patient() -> Patient {
    Patient {
        id: PatientId(Uuid::new_v4()),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1980, 4, 12).unwrap(),
        social_security_number: Some("2800475123456".to_string()),
        created_at: Utc::now(),
    }
}

/// Create a test patient with a specific name
pub fn test_patient_named(first_name: &str, last_name: &str) -> Patient {
    Patient {
        id: PatientId(Uuid::new_v4()),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birth_date: NaiveDate::from_ymd_opt(1975, 1, 1).unwrap(),
        social_security_number: None,
        created_at: Utc::now(),
    }
}

/// Create a test visit for a patient with default values
pub fn test_visit(patient_id: PatientId) -> Visit {
    Visit {
        id: VisitId(Uuid::new_v4()),
        patient_id,
        date: Utc::now() - Duration::days(3),
        visit_type: VisitType::DoctorOffice,
        reason: VisitReason::FirstVisit,
        family_history: Some("No known conditions".to_string()),
        created_at: Utc::now(),
    }
}

/// Create a test visit with a specific reason
pub fn test_visit_with_reason(patient_id: PatientId, reason: VisitReason) -> Visit {
    Visit {
        reason,
        visit_type: match reason {
            VisitReason::Urgent => VisitType::Home,
            _ => VisitType::DoctorOffice,
        },
        ..test_visit(patient_id)
    }
}
