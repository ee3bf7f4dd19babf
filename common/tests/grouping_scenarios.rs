//! Grouping scenarios driven by API payloads recorded as JSON fixtures.

use common::grouping::{
    DisciplinesView, SearchTerm, TestEntry, discipline_names, group_by_discipline,
    group_by_teacher, unique_teacher_names,
};
use common::model::{Category, Teacher, TeacherDiscipline, Test};
use common::requests::{CategoriesResponse, TestsByDisciplineResponse, TestsByTeacherResponse};

fn by_discipline() -> TestsByDisciplineResponse {
    serde_json::from_str(include_str!("fixtures/tests_by_discipline.json")).unwrap()
}

fn by_teacher() -> TestsByTeacherResponse {
    serde_json::from_str(include_str!("fixtures/tests_by_teacher.json")).unwrap()
}

fn categories() -> Vec<Category> {
    let response: CategoriesResponse =
        serde_json::from_str(include_str!("fixtures/categories.json")).unwrap();
    response.categories
}

fn section_names(groups: &[common::grouping::CategoryGroup]) -> Vec<&str> {
    groups
        .iter()
        .map(|group| group.category.name.as_str())
        .collect()
}

#[test]
fn test_fixture_deserializes_nested_records() {
    let response = by_discipline();
    assert_eq!(response.tests.len(), 3);

    let html = &response.tests[0].disciplines[0];
    assert_eq!(html.name, "HTML e CSS");
    assert!(html.term.is_none());
    let link = &html.teacher_disciplines[0];
    assert!(link.discipline.is_none());
    assert_eq!(link.tests[0].pdf_url, "https://example.com/globo.pdf");
    assert_eq!(link.tests[0].views, 12);
}

#[test]
fn test_disciplines_page_without_search() {
    let response = by_discipline();
    let view = group_by_discipline(&response.tests, &categories(), &SearchTerm::none());

    let DisciplinesView::ByTerm(terms) = view else {
        panic!("expected term groups");
    };
    let numbers: Vec<u32> = terms.iter().map(|group| group.term.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let html = &terms[0].disciplines[0];
    assert_eq!(section_names(&html.categories), vec!["Projeto", "Recuperação"]);
    assert_eq!(
        html.categories[0].entries[0].display_label(),
        "Globo.com (Diego Pinho)"
    );

    assert!(terms[0].disciplines[1].is_empty());
    assert!(!terms[0].is_empty());
    assert!(terms[2].is_empty());
}

#[test]
fn test_disciplines_page_search() {
    let response = by_discipline();

    let view = group_by_discipline(&response.tests, &categories(), &SearchTerm::new("React"));
    let DisciplinesView::Matches(matches) = view else {
        panic!("expected matches");
    };
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "React");
    assert_eq!(section_names(&matches[0].categories), vec!["Projeto"]);

    let view = group_by_discipline(&response.tests, &categories(), &SearchTerm::new("Rust"));
    assert!(view.is_empty());
    assert_eq!(view, DisciplinesView::Matches(vec![]));
}

#[test]
fn test_discipline_suggestions() {
    assert_eq!(
        discipline_names(&by_discipline().tests),
        vec!["HTML e CSS", "JavaScript", "React"]
    );
}

#[test]
fn test_instructors_page_collapses_teachers() {
    let response = by_teacher();
    assert_eq!(
        unique_teacher_names(&response.tests),
        vec!["Diego Pinho", "Bruna Hamori"]
    );

    let groups = group_by_teacher(&response.tests, &categories(), &SearchTerm::none());
    assert_eq!(groups.len(), 2);

    let diego = &groups[0];
    assert_eq!(diego.name, "Diego Pinho");
    assert_eq!(section_names(&diego.categories), vec!["Projeto", "Prática"]);
    let labels: Vec<String> = diego
        .categories
        .iter()
        .flat_map(|group| group.entries.iter().map(TestEntry::display_label))
        .collect();
    assert_eq!(labels, vec!["Globo.com (HTML e CSS)", "Prática JS (JavaScript)"]);
}

#[test]
fn test_instructors_search_with_unknown_name_yields_nothing() {
    let groups = group_by_teacher(&by_teacher().tests, &categories(), &SearchTerm::new("Ninguém"));
    assert!(groups.is_empty());
}

#[test]
fn test_only_categories_with_tests_are_listed() {
    let a = Category {
        id: 9,
        name: "A".to_string(),
    };
    let b = Category {
        id: 8,
        name: "B".to_string(),
    };
    let test = |id: u64, name: &str| Test {
        id,
        name: name.to_string(),
        pdf_url: String::new(),
        category: a.clone(),
        views: 0,
    };
    let records = vec![TeacherDiscipline {
        id: 1,
        teacher: Teacher {
            id: 1,
            name: "Diego Pinho".to_string(),
        },
        discipline: None,
        tests: vec![test(1, "P1"), test(2, "P2")],
    }];

    let groups = group_by_teacher(&records, &[a.clone(), b], &SearchTerm::none());
    assert_eq!(groups[0].categories.len(), 1);
    assert_eq!(groups[0].categories[0].category, a);
    assert_eq!(groups[0].categories[0].entries.len(), 2);
}
