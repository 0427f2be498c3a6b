//! Resource kinds reported in lookup failures

use serde::{Deserialize, Serialize};

/// Kind of resource a lookup was aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resource {
    Patient,
    Visit,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Patient => write!(f, "PATIENT"),
            Resource::Visit => write!(f, "VISIT"),
        }
    }
}
