//! PostgreSQL adapter for VisitRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::{begin_read_only, db_err};
use crate::domain::entities::{PatientId, Visit, VisitId, VisitReason, VisitType};
use crate::domain::ports::VisitRepository;
use crate::entity::visits;
use crate::error::DomainError;

/// PostgreSQL implementation of VisitRepository
pub struct PostgresVisitRepository {
    db: DatabaseConnection,
}

impl PostgresVisitRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VisitRepository for PostgresVisitRepository {
    async fn find(&self, id: &VisitId) -> Result<Option<Visit>, DomainError> {
        let txn = begin_read_only(&self.db).await?;

        let result = visits::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Visit>, DomainError> {
        let txn = begin_read_only(&self.db).await?;

        let results = visits::Entity::find()
            .order_by_asc(visits::Column::Date)
            .order_by_asc(visits::Column::Id)
            .all(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<visits::Model> for Visit {
    fn from(model: visits::Model) -> Self {
        Visit {
            id: VisitId(model.id),
            patient_id: PatientId(model.patient_id),
            date: model.date.with_timezone(&Utc),
            visit_type: model.visit_type.parse().unwrap_or_else(|e| {
                tracing::warn!(visit_id = %model.id, "{}", e);
                VisitType::DoctorOffice
            }),
            reason: model.reason.parse().unwrap_or_else(|e| {
                tracing::warn!(visit_id = %model.id, "{}", e);
                VisitReason::Recurring
            }),
            family_history: model.family_history,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
