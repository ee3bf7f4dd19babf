use serde::{Deserialize, Serialize};

/// Academic period that groups disciplines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    /// Ordinal shown to users as "<number> Período".
    pub number: u32,
}
