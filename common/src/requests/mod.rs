//! Request bodies and response envelopes exchanged with the exam API.

use serde::{Deserialize, Serialize};

use crate::model::{Category, Discipline, Teacher, TestsByDiscipline, TestsByTeacher};

/// Body of `POST /sign-up` and `POST /sign-in`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub token: String,
}

/// Body of `POST /tests`. Related records are referenced by name; the server
/// resolves them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestRequest {
    pub name: String,
    pub pdf_url: String,
    pub category_name: String,
    pub discipline_name: String,
    pub teacher_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestsByDisciplineResponse {
    pub tests: Vec<TestsByDiscipline>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestsByTeacherResponse {
    pub tests: Vec<TestsByTeacher>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeachersResponse {
    pub teachers: Vec<Teacher>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisciplinesResponse {
    pub disciplines: Vec<Discipline>,
}

/// `GET /teachers/{discipline}` answers with join records; only the teacher
/// side is of interest.
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherLink {
    pub teacher: Teacher,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeachersByDisciplineResponse {
    pub teachers: Vec<TeacherLink>,
}

impl TeachersByDisciplineResponse {
    pub fn teacher_names(self) -> Vec<String> {
        self.teachers.into_iter().map(|link| link.teacher.name).collect()
    }
}

/// Structured failure body sent by the API alongside a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
