//! SeaORM entity models
//!
//! Table mappings for the Postgres adapters. Domain code never sees these;
//! adapters convert them into `crate::domain::entities` types.

pub mod patients;
pub mod visits;
