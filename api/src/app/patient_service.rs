//! Patient lookup service
//!
//! Read-only access to patients. Callers pass a presenter that turns each
//! `Patient` into whatever shape they need, so the service never decides the
//! response format.

use std::sync::Arc;

use crate::domain::entities::{Patient, PatientId, Resource};
use crate::domain::ports::PatientRepository;
use crate::error::DomainError;

/// Service for looking up patients
pub struct PatientLookupService<PR>
where
    PR: PatientRepository + ?Sized,
{
    patients: Arc<PR>,
}

impl<PR> PatientLookupService<PR>
where
    PR: PatientRepository + ?Sized,
{
    pub fn new(patients: Arc<PR>) -> Self {
        Self { patients }
    }

    /// Find a patient and present it
    ///
    /// Fails with `ResourceNotFound(PATIENT, id)` when the repository has no
    /// such patient; `presenter` is only called on a hit.
    pub async fn get_patient<T, F>(&self, id: &PatientId, presenter: F) -> Result<T, DomainError>
    where
        F: FnOnce(Patient) -> T,
    {
        tracing::debug!(patient_id = %id, "Looking up patient");

        match self.patients.find(id).await? {
            Some(patient) => Ok(presenter(patient)),
            None => {
                tracing::warn!(patient_id = %id, "Patient not found");
                Err(DomainError::not_found(Resource::Patient, id))
            }
        }
    }

    /// Present every patient, keeping the repository's order
    pub async fn get_all<T, F>(&self, presenter: F) -> Result<Vec<T>, DomainError>
    where
        F: FnMut(Patient) -> T,
    {
        let patients = self.patients.find_all().await?;
        tracing::debug!(count = patients.len(), "Listing patients");

        Ok(patients.into_iter().map(presenter).collect())
    }
}
