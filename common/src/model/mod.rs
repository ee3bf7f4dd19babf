//! Wire models returned by the exam API.
//!
//! The API nests records differently depending on the grouping that was
//! requested, so back-references that only one grouping carries are optional
//! here and default to empty when absent.

pub mod category;
pub mod discipline;
pub mod grouped;
pub mod teacher;
pub mod term;
pub mod test;

pub use category::Category;
pub use discipline::{Discipline, DisciplineRef};
pub use grouped::{TestsByDiscipline, TestsByTeacher};
pub use teacher::{Teacher, TeacherDiscipline};
pub use term::Term;
pub use test::Test;
