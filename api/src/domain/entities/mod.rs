//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod patient;
pub mod resource;
pub mod visit;

pub use patient::{Patient, PatientId};
pub use resource::Resource;
pub use visit::{Visit, VisitId, VisitReason, VisitType};
