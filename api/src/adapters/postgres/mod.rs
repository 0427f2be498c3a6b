//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.
//! Every query runs inside its own read-only transaction.

pub mod patient_repo;
pub mod visit_repo;


pub use patient_repo::PostgresPatientRepository;
pub use visit_repo::PostgresVisitRepository;

use sea_orm::{AccessMode, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::error::DomainError;

fn db_err(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Open a read-only transaction. Postgres rejects any write issued inside it.
async fn begin_read_only(db: &DatabaseConnection) -> Result<DatabaseTransaction, DomainError> {
    db.begin_with_config(None, Some(AccessMode::ReadOnly))
        .await
        .map_err(db_err)
}
