//! Domain layer
//!
//! Patient and visit records, plus the ports the lookup services read them
//! through. No framework or database types appear here.
//! - `entities`: Domain models and the resource kinds named in lookup errors
//! - `ports`: Repository traits implemented by adapters

pub mod entities;
pub mod ports;
