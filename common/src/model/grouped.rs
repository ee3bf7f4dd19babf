//! Top-level records of `GET /tests?groupBy=...`.

use serde::{Deserialize, Serialize};

use super::{Discipline, TeacherDiscipline};

/// One term with its disciplines (`groupBy=disciplines`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestsByDiscipline {
    pub id: u64,
    pub number: u32,
    #[serde(default)]
    pub disciplines: Vec<Discipline>,
}

/// One teacher/discipline link with its tests (`groupBy=teachers`).
///
/// A teacher who lectures several disciplines appears in several records.
pub type TestsByTeacher = TeacherDiscipline;

impl TestsByDiscipline {
    pub fn term(&self) -> super::Term {
        super::Term {
            id: self.id,
            number: self.number,
        }
    }
}
