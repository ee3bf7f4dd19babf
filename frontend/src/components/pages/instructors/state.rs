use common::model::{Category, Teacher, TestsByTeacher};
use common::sequencing::RequestSequencer;

pub struct InstructorsPage {
    pub records: Vec<TestsByTeacher>,
    pub categories: Vec<Category>,
    /// Every teacher known to the API; feeds the search suggestions, which
    /// therefore also offer teachers without tests.
    pub teachers: Vec<Teacher>,
    pub search: String,
    pub loads: RequestSequencer,
    pub loaded: bool,
}

impl InstructorsPage {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            categories: Vec::new(),
            teachers: Vec::new(),
            search: String::new(),
            loads: RequestSequencer::new(),
            loaded: false,
        }
    }

    pub fn teacher_names(&self) -> Vec<String> {
        self.teachers.iter().map(|teacher| teacher.name.clone()).collect()
    }
}
