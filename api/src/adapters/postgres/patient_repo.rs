//! PostgreSQL adapter for PatientRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::{begin_read_only, db_err};
use crate::domain::entities::{Patient, PatientId};
use crate::domain::ports::PatientRepository;
use crate::entity::patients;
use crate::error::DomainError;

/// PostgreSQL implementation of PatientRepository
pub struct PostgresPatientRepository {
    db: DatabaseConnection,
}

impl PostgresPatientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PatientRepository for PostgresPatientRepository {
    async fn find(&self, id: &PatientId) -> Result<Option<Patient>, DomainError> {
        let txn = begin_read_only(&self.db).await?;

        let result = patients::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Patient>, DomainError> {
        let txn = begin_read_only(&self.db).await?;

        let results = patients::Entity::find()
            .order_by_asc(patients::Column::LastName)
            .order_by_asc(patients::Column::FirstName)
            .order_by_asc(patients::Column::Id)
            .all(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<patients::Model> for Patient {
    fn from(model: patients::Model) -> Self {
        Patient {
            id: PatientId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            birth_date: model.birth_date,
            social_security_number: model.social_security_number,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
