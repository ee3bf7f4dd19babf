use serde::{Deserialize, Serialize};

/// Classification tag applied to tests (e.g. "P1", "Recuperação").
///
/// Categories form a global list that is independent of terms and
/// disciplines; the grouped views use that list to decide the order in which
/// category sections appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}
