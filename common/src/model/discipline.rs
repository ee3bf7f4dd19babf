use serde::{Deserialize, Serialize};

use super::{TeacherDiscipline, Term};

/// A course that belongs to one term, with the teacher links (and through
/// them the tests) nested inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub teacher_disciplines: Vec<TeacherDiscipline>,
    #[serde(default)]
    pub term: Option<Term>,
}

/// Discipline as referenced from a teacher link, without its own links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineRef {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub term: Option<Term>,
}
