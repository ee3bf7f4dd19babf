use common::model::{Category, TestsByDiscipline};
use common::sequencing::RequestSequencer;

/// Last loaded snapshot plus the search text. Everything on screen is
/// derived from these fields in `view`.
pub struct DisciplinesPage {
    pub terms: Vec<TestsByDiscipline>,
    pub categories: Vec<Category>,
    pub search: String,
    pub loads: RequestSequencer,
    /// Guard so a load is requested once per token.
    pub loaded: bool,
}

impl DisciplinesPage {
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
            categories: Vec::new(),
            search: String::new(),
            loads: RequestSequencer::new(),
            loaded: false,
        }
    }
}
