use serde::{Deserialize, Serialize};

use super::{DisciplineRef, Test};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: u64,
    pub name: String,
}

/// Join record linking one teacher to one discipline. Tests hang off this
/// record, which is what gives every test exactly one teacher and one
/// discipline.
///
/// The discipline back-reference is only sent by the teacher grouping; under
/// the discipline grouping the enclosing `Discipline` already identifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherDiscipline {
    pub id: u64,
    pub teacher: Teacher,
    #[serde(default)]
    pub discipline: Option<DisciplineRef>,
    #[serde(default)]
    pub tests: Vec<Test>,
}

impl TeacherDiscipline {
    /// Tests of this record tagged with `category_id`, in server order.
    pub fn tests_of_category(&self, category_id: u64) -> impl Iterator<Item = &Test> {
        self.tests
            .iter()
            .filter(move |test| test.is_of_category(category_id))
    }

    pub fn discipline_name(&self) -> &str {
        self.discipline
            .as_ref()
            .map(|discipline| discipline.name.as_str())
            .unwrap_or_default()
    }
}
