//! State of the "add a test" form and the notices it produces.
//!
//! The form keeps the reference lists that feed its suggestion inputs
//! (categories, disciplines, and the teachers of the chosen discipline) next
//! to the five submitted fields. Teacher lookups are tagged through a
//! [`RequestSequencer`] so that switching disciplines quickly can never leave
//! the teachers of an earlier choice on screen.

use crate::auth::AuthToken;
use crate::error::ApiError;
use crate::model::{Category, Discipline};
use crate::requests::CreateTestRequest;
use crate::sequencing::{RequestId, RequestSequencer};

/// Confirmation shown after a test was stored.
pub const TEST_CREATED_MESSAGE: &str = "Prova adicionada com sucesso!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn created() -> Self {
        Self::success(TEST_CREATED_MESSAGE)
    }

    pub fn from_error(err: &ApiError) -> Self {
        Self::error(err.user_message())
    }
}

/// Counter that requests a reload of the reference data each time it moves.
///
/// Pages remember the generation they last loaded; a successful submission
/// bumps the counter, which makes the difference observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadSignal(u32);

impl ReloadSignal {
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn generation(&self) -> u32 {
        self.0
    }
}

/// A pending `GET /teachers/{discipline}` issued by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherLookup {
    pub id: RequestId,
    pub discipline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTestForm {
    pub name: String,
    pub pdf_url: String,
    pub category_name: String,
    pub discipline_name: String,
    pub teacher_name: String,

    pub categories: Vec<String>,
    pub disciplines: Vec<String>,
    pub teachers: Vec<String>,

    lookups: RequestSequencer,
    reference_loads: RequestSequencer,
}

impl CreateTestForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    pub fn set_pdf_url(&mut self, value: String) {
        self.pdf_url = value;
    }

    pub fn set_category(&mut self, value: String) {
        self.category_name = value;
    }

    pub fn set_teacher(&mut self, value: String) {
        if self.teacher_enabled() {
            self.teacher_name = value;
        }
    }

    /// A teacher can only be picked once a discipline is chosen.
    pub fn teacher_enabled(&self) -> bool {
        !self.discipline_name.is_empty()
    }

    /// Records a new discipline choice.
    ///
    /// Any change clears the chosen teacher and the teacher suggestions. An
    /// empty value clears the discipline too and needs no lookup; otherwise
    /// the returned lookup describes the teachers request to send.
    pub fn select_discipline(&mut self, value: String) -> Option<TeacherLookup> {
        self.teacher_name.clear();
        self.teachers.clear();

        if value.is_empty() {
            self.discipline_name.clear();
            self.lookups.invalidate();
            return None;
        }

        self.discipline_name = value.clone();
        Some(TeacherLookup {
            id: self.lookups.issue(),
            discipline: value,
        })
    }

    /// Applies the answer of a teacher lookup. Answers to superseded lookups
    /// are dropped and `false` is returned.
    pub fn apply_teachers(&mut self, id: RequestId, teachers: Vec<String>) -> bool {
        if !self.lookups.is_latest(id) {
            return false;
        }
        self.teachers = teachers;
        self.teacher_name.clear();
        true
    }

    /// Whether `id` is the teacher lookup still awaited. Failures of other
    /// lookups are not reported.
    pub fn is_current_lookup(&self, id: RequestId) -> bool {
        self.lookups.is_latest(id)
    }

    /// Tags a reference-data load (categories and disciplines).
    pub fn begin_reference_load(&mut self) -> RequestId {
        self.reference_loads.issue()
    }

    /// Replaces the suggestion lists and resets every field, as after a
    /// fresh page load. Stale loads are dropped and `false` is returned.
    pub fn apply_reference_data(
        &mut self,
        id: RequestId,
        categories: &[Category],
        disciplines: &[Discipline],
    ) -> bool {
        if !self.reference_loads.is_latest(id) {
            return false;
        }
        self.categories = categories.iter().map(|category| category.name.clone()).collect();
        self.disciplines = disciplines
            .iter()
            .map(|discipline| discipline.name.clone())
            .collect();
        self.teachers.clear();
        self.reset_fields();
        true
    }

    /// Whether `id` is the reference-data load still awaited.
    pub fn is_current_reference_load(&self, id: RequestId) -> bool {
        self.reference_loads.is_latest(id)
    }

    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.pdf_url.clear();
        self.category_name.clear();
        self.discipline_name.clear();
        self.teacher_name.clear();
        self.lookups.invalidate();
    }

    pub fn to_request(&self) -> CreateTestRequest {
        CreateTestRequest {
            name: self.name.clone(),
            pdf_url: self.pdf_url.clone(),
            category_name: self.category_name.clone(),
            discipline_name: self.discipline_name.clone(),
            teacher_name: self.teacher_name.clone(),
        }
    }

    /// Pairs the request body with the token it must be sent with.
    ///
    /// Without a token there is nothing to send: the form is left as is and
    /// `None` is returned.
    pub fn prepare_submit(
        &self,
        token: Option<&AuthToken>,
    ) -> Option<(AuthToken, CreateTestRequest)> {
        token.map(|token| (token.clone(), self.to_request()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_FAILURE_MESSAGE;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_selecting_discipline_clears_teacher() {
        let mut form = CreateTestForm::new();
        let lookup = form.select_discipline("Cálculo".to_string()).unwrap();
        assert_eq!(lookup.discipline, "Cálculo");
        assert!(form.apply_teachers(lookup.id, names(&["Diego", "Bruna"])));
        form.set_teacher("Diego".to_string());
        assert_eq!(form.teacher_name, "Diego");

        let lookup = form.select_discipline("Física".to_string()).unwrap();
        assert_eq!(form.teacher_name, "");
        assert!(form.teachers.is_empty());
        assert_eq!(form.discipline_name, "Física");
        assert_eq!(lookup.discipline, "Física");
    }

    #[test]
    fn test_clearing_discipline_clears_teacher_list_and_selection() {
        let mut form = CreateTestForm::new();
        let lookup = form.select_discipline("Cálculo".to_string()).unwrap();
        form.apply_teachers(lookup.id, names(&["Diego"]));
        form.set_teacher("Diego".to_string());

        assert!(form.select_discipline(String::new()).is_none());
        assert!(form.teachers.is_empty());
        assert_eq!(form.teacher_name, "");
        assert_eq!(form.discipline_name, "");
        assert!(!form.teacher_enabled());
    }

    #[test]
    fn test_teacher_is_disabled_without_discipline() {
        let mut form = CreateTestForm::new();
        form.set_teacher("Diego".to_string());
        assert_eq!(form.teacher_name, "");
    }

    #[test]
    fn test_stale_teacher_lookup_is_ignored() {
        let mut form = CreateTestForm::new();
        let first = form.select_discipline("Cálculo".to_string()).unwrap();
        let second = form.select_discipline("Física".to_string()).unwrap();

        assert!(form.apply_teachers(second.id, names(&["Bruna"])));
        assert!(!form.apply_teachers(first.id, names(&["Diego"])));
        assert_eq!(form.teachers, names(&["Bruna"]));
    }

    #[test]
    fn test_only_latest_lookup_is_current() {
        let mut form = CreateTestForm::new();
        let first = form.select_discipline("Cálculo".to_string()).unwrap();
        assert!(form.is_current_lookup(first.id));

        let second = form.select_discipline("Física".to_string()).unwrap();
        assert!(form.apply_teachers(second.id, names(&["Bruna"])));
        assert!(!form.is_current_lookup(first.id));
        assert!(form.is_current_lookup(second.id));

        form.select_discipline(String::new());
        assert!(!form.is_current_lookup(second.id));
    }

    #[test]
    fn test_lookup_answer_after_clearing_is_ignored() {
        let mut form = CreateTestForm::new();
        let lookup = form.select_discipline("Cálculo".to_string()).unwrap();
        form.select_discipline(String::new());

        assert!(!form.apply_teachers(lookup.id, names(&["Diego"])));
        assert!(form.teachers.is_empty());
    }

    #[test]
    fn test_missing_token_prepares_nothing() {
        let mut form = CreateTestForm::new();
        form.set_name("P1 2021".to_string());
        let before = form.clone();

        assert!(form.prepare_submit(None).is_none());
        assert_eq!(form, before);
    }

    #[test]
    fn test_prepare_submit_carries_all_fields() {
        let mut form = CreateTestForm::new();
        form.set_name("P1 2021".to_string());
        form.set_pdf_url("https://example.com/p1.pdf".to_string());
        form.set_category("P1".to_string());
        let lookup = form.select_discipline("Cálculo".to_string()).unwrap();
        form.apply_teachers(lookup.id, names(&["Diego"]));
        form.set_teacher("Diego".to_string());

        let token = AuthToken::new("abc").unwrap();
        let (sent_token, request) = form.prepare_submit(Some(&token)).unwrap();
        assert_eq!(sent_token, token);
        assert_eq!(
            request,
            CreateTestRequest {
                name: "P1 2021".to_string(),
                pdf_url: "https://example.com/p1.pdf".to_string(),
                category_name: "P1".to_string(),
                discipline_name: "Cálculo".to_string(),
                teacher_name: "Diego".to_string(),
            }
        );
    }

    #[test]
    fn test_reference_data_resets_fields() {
        let mut form = CreateTestForm::new();
        form.set_name("P1".to_string());
        form.select_discipline("Cálculo".to_string());

        let load = form.begin_reference_load();
        let categories = vec![Category {
            id: 1,
            name: "P1".to_string(),
        }];
        let disciplines = vec![Discipline {
            id: 1,
            name: "Cálculo".to_string(),
            teacher_disciplines: vec![],
            term: None,
        }];
        assert!(form.apply_reference_data(load, &categories, &disciplines));

        assert_eq!(form.categories, names(&["P1"]));
        assert_eq!(form.disciplines, names(&["Cálculo"]));
        assert_eq!(form.name, "");
        assert_eq!(form.discipline_name, "");
    }

    #[test]
    fn test_stale_reference_load_is_ignored() {
        let mut form = CreateTestForm::new();
        let first = form.begin_reference_load();
        let second = form.begin_reference_load();

        assert!(!form.is_current_reference_load(first));
        assert!(form.is_current_reference_load(second));
        assert!(!form.apply_reference_data(first, &[], &[]));
        assert!(form.apply_reference_data(second, &[], &[]));
    }

    #[test]
    fn test_notices() {
        assert_eq!(Notice::created().kind, NoticeKind::Success);
        assert_eq!(Notice::created().text, TEST_CREATED_MESSAGE);

        let notice = Notice::from_error(&ApiError::Server {
            status: 409,
            message: Some("X".to_string()),
        });
        assert_eq!(notice, Notice::error("X"));

        let notice = Notice::from_error(&ApiError::Network("offline".to_string()));
        assert_eq!(notice.text, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_reload_signal_moves_on_bump() {
        let mut signal = ReloadSignal::default();
        let seen = signal.generation();
        signal.bump();
        assert_ne!(signal.generation(), seen);
    }
}
