use common::model::{Category, Teacher, TestsByTeacher};
use common::sequencing::RequestId;
use common::ApiError;

pub enum Msg {
    Load,
    Loaded {
        id: RequestId,
        records: Vec<TestsByTeacher>,
        categories: Vec<Category>,
        teachers: Vec<Teacher>,
    },
    LoadFailed {
        id: RequestId,
        error: ApiError,
    },
    SetSearch(String),
}
