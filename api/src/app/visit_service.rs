//! Visit lookup service
//!
//! Same shape as the patient lookup: a find-or-fail by id and a find-all,
//! each handing records to a caller-supplied presenter.

use std::sync::Arc;

use crate::domain::entities::{Resource, Visit, VisitId};
use crate::domain::ports::VisitRepository;
use crate::error::DomainError;

/// Service for looking up visits
pub struct VisitLookupService<VR>
where
    VR: VisitRepository + ?Sized,
{
    visits: Arc<VR>,
}

impl<VR> VisitLookupService<VR>
where
    VR: VisitRepository + ?Sized,
{
    pub fn new(visits: Arc<VR>) -> Self {
        Self { visits }
    }

    /// Find a visit and present it
    ///
    /// Fails with `ResourceNotFound(VISIT, id)` on a miss.
    pub async fn get_visit<T, F>(&self, id: &VisitId, presenter: F) -> Result<T, DomainError>
    where
        F: FnOnce(Visit) -> T,
    {
        tracing::debug!(visit_id = %id, "Looking up visit");

        self.visits
            .find(id)
            .await?
            .map(presenter)
            .ok_or_else(|| {
                tracing::warn!(visit_id = %id, "Visit not found");
                DomainError::not_found(Resource::Visit, id)
            })
    }

    /// Present every visit, keeping the repository's order
    pub async fn get_all<T, F>(&self, presenter: F) -> Result<Vec<T>, DomainError>
    where
        F: FnMut(Visit) -> T,
    {
        let visits = self.visits.find_all().await?;
        tracing::debug!(count = visits.len(), "Listing visits");

        Ok(visits.into_iter().map(presenter).collect())
    }
}
