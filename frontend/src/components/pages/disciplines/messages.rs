use common::model::{Category, TestsByDiscipline};
use common::sequencing::RequestId;
use common::ApiError;

pub enum Msg {
    Load,
    Loaded {
        id: RequestId,
        terms: Vec<TestsByDiscipline>,
        categories: Vec<Category>,
    },
    LoadFailed {
        id: RequestId,
        error: ApiError,
    },
    SetSearch(String),
}
