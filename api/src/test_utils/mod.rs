//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repositories also back the HTTP tests: `AppState` holds its
//! repositories behind `dyn` port traits, so a router can be built without a
//! database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
