use common::forms::{CreateTestForm, ReloadSignal};

pub struct CreateTestPage {
    pub form: CreateTestForm,
    /// Bumped after every stored test.
    pub reload: ReloadSignal,
    /// Generation of `reload` whose reference data was last requested.
    pub loaded_generation: Option<u32>,
    /// True while a submission is in flight; disables the submit button.
    pub submitting: bool,
}

impl CreateTestPage {
    pub fn new() -> Self {
        Self {
            form: CreateTestForm::new(),
            reload: ReloadSignal::default(),
            loaded_generation: None,
            submitting: false,
        }
    }
}
