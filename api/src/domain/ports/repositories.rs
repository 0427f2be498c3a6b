//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Both ports are read-only: records are owned by whatever system writes the
//! `patients` and `visits` tables.

use async_trait::async_trait;

use crate::domain::entities::{Patient, PatientId, Visit, VisitId};
use crate::error::DomainError;

/// Repository for Patient entities
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Find a patient by ID. `Ok(None)` when no patient matches.
    async fn find(&self, id: &PatientId) -> Result<Option<Patient>, DomainError>;

    /// All patients, in the repository's own order
    async fn find_all(&self) -> Result<Vec<Patient>, DomainError>;
}

/// Repository for Visit entities
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Find a visit by ID. `Ok(None)` when no visit matches.
    async fn find(&self, id: &VisitId) -> Result<Option<Visit>, DomainError>;

    /// All visits, in the repository's own order
    async fn find_all(&self) -> Result<Vec<Visit>, DomainError>;
}
