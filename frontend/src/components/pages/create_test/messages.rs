use common::model::{Category, Discipline};
use common::sequencing::RequestId;
use common::ApiError;

pub enum Msg {
    LoadReferenceData,
    ReferenceDataLoaded {
        id: RequestId,
        categories: Vec<Category>,
        disciplines: Vec<Discipline>,
    },
    ReferenceDataFailed {
        id: RequestId,
        error: ApiError,
    },
    SetName(String),
    SetPdfUrl(String),
    SetCategory(String),
    SetDiscipline(String),
    TeachersLoaded {
        id: RequestId,
        teachers: Vec<String>,
    },
    TeachersFailed {
        id: RequestId,
        error: ApiError,
    },
    SetTeacher(String),
    Submit,
    SubmitSucceeded,
    SubmitFailed(ApiError),
}
