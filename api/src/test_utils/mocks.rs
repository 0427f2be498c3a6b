//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! Records are kept in insertion order, which is the order `find_all`
//! returns them in.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Patient, PatientId, Visit, VisitId};
use crate::domain::ports::{PatientRepository, VisitRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Patient Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPatientRepository {
    patients: Arc<RwLock<Vec<Patient>>>,
    find_calls: AtomicUsize,
    fail: bool,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a patient for testing
    pub fn with_patient(self, patient: Patient) -> Self {
        self.patients.write().unwrap().push(patient);
        self
    }

    /// Number of times `find` has been called
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn find(&self, id: &PatientId) -> Result<Option<Patient>, DomainError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::Database("Simulated failure".to_string()));
        }

        let patients = self.patients.read().unwrap();
        Ok(patients.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Patient>, DomainError> {
        if self.fail {
            return Err(DomainError::Database("Simulated failure".to_string()));
        }

        Ok(self.patients.read().unwrap().clone())
    }
}

// ============================================================================
// In-Memory Visit Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryVisitRepository {
    visits: Arc<RwLock<Vec<Visit>>>,
    find_calls: AtomicUsize,
    fail: bool,
}

impl InMemoryVisitRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a visit for testing
    pub fn with_visit(self, visit: Visit) -> Self {
        self.visits.write().unwrap().push(visit);
        self
    }

    /// Number of times `find` has been called
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn find(&self, id: &VisitId) -> Result<Option<Visit>, DomainError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::Database("Simulated failure".to_string()));
        }

        let visits = self.visits.read().unwrap();
        Ok(visits.iter().find(|v| v.id == *id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Visit>, DomainError> {
        if self.fail {
            return Err(DomainError::Database("Simulated failure".to_string()));
        }

        Ok(self.visits.read().unwrap().clone())
    }
}
