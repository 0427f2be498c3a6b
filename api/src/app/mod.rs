//! Application layer
//!
//! Contains the lookup use cases.
//! Services coordinate between domain entities and repository ports.

pub mod patient_service;
pub mod visit_service;

pub use patient_service::PatientLookupService;
pub use visit_service::VisitLookupService;
