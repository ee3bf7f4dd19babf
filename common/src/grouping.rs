//! Turns the grouped `/tests` responses into the nested sections the pages
//! render.
//!
//! Both pages nest their output the same way below the primary axis:
//! category, then the secondary-axis name attached to each test, then the
//! test itself. A category section only exists for a group when at least one
//! of the group's tests carries that category; groups without any test
//! report `is_empty()` so the page can show a "no tests" message instead.
//!
//! All functions here are pure and keep the order in which records arrive:
//! groups follow the response order, category sections follow the category
//! list order, and tests follow the order of the join records that hold them.

use crate::model::{
    Category, Discipline, TeacherDiscipline, Term, Test, TestsByDiscipline, TestsByTeacher,
};

/// Exact-match filter on the name of the primary axis.
///
/// The empty string means "no search". Anything else is compared verbatim,
/// without trimming or case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(Option<String>);

impl SearchTerm {
    pub fn new(value: &str) -> Self {
        if value.is_empty() {
            Self(None)
        } else {
            Self(Some(value.to_string()))
        }
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_active(&self) -> bool {
        self.0.is_some()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }

    /// Whether `name` passes the filter. Always true when no search is set.
    pub fn matches(&self, name: &str) -> bool {
        self.0.as_deref().is_none_or(|search| search == name)
    }
}

/// One test inside a category section, labelled with the secondary-axis name
/// (the teacher on the disciplines page, the discipline on the instructors
/// page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEntry {
    pub test: Test,
    pub label: String,
}

impl TestEntry {
    /// Link text: `"<test name> (<label>)"`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.test.name, self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: Category,
    pub entries: Vec<TestEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisciplineGroup {
    pub id: u64,
    pub name: String,
    pub categories: Vec<CategoryGroup>,
}

impl DisciplineGroup {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermGroup {
    pub term: Term,
    pub disciplines: Vec<DisciplineGroup>,
}

impl TermGroup {
    /// A term is empty when none of its disciplines has a test.
    pub fn is_empty(&self) -> bool {
        self.disciplines.iter().all(DisciplineGroup::is_empty)
    }
}

/// Output of [`group_by_discipline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisciplinesView {
    /// No search: every term with its disciplines.
    ByTerm(Vec<TermGroup>),
    /// Search active: the disciplines whose name matched, across all terms.
    Matches(Vec<DisciplineGroup>),
}

impl DisciplinesView {
    /// True when nothing in the view holds a test.
    pub fn is_empty(&self) -> bool {
        match self {
            DisciplinesView::ByTerm(terms) => terms.iter().all(TermGroup::is_empty),
            DisciplinesView::Matches(disciplines) => {
                disciplines.iter().all(DisciplineGroup::is_empty)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherGroup {
    pub name: String,
    pub categories: Vec<CategoryGroup>,
}

impl TeacherGroup {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Builds the category sections for a set of join records.
///
/// `label` picks the secondary-axis name for each record.
fn category_groups<'a, F>(
    links: &[&'a TeacherDiscipline],
    categories: &[Category],
    label: F,
) -> Vec<CategoryGroup>
where
    F: Fn(&'a TeacherDiscipline) -> &'a str,
{
    categories
        .iter()
        .filter_map(|category| {
            let entries: Vec<TestEntry> = links
                .iter()
                .copied()
                .flat_map(|link| {
                    let name = label(link);
                    link.tests_of_category(category.id).map(move |test| TestEntry {
                        test: test.clone(),
                        label: name.to_string(),
                    })
                })
                .collect();

            (!entries.is_empty()).then(|| CategoryGroup {
                category: category.clone(),
                entries,
            })
        })
        .collect()
}

fn discipline_group(discipline: &Discipline, categories: &[Category]) -> DisciplineGroup {
    let links: Vec<&TeacherDiscipline> = discipline.teacher_disciplines.iter().collect();
    DisciplineGroup {
        id: discipline.id,
        name: discipline.name.clone(),
        categories: category_groups(&links, categories, |link| link.teacher.name.as_str()),
    }
}

/// Groups the `groupBy=disciplines` response for the disciplines page.
///
/// Without a search the output is term → discipline → category → test. With
/// a search, every discipline whose name equals the search is collected from
/// all terms, in term order, and the term level is dropped.
pub fn group_by_discipline(
    terms: &[TestsByDiscipline],
    categories: &[Category],
    search: &SearchTerm,
) -> DisciplinesView {
    if !search.is_active() {
        let groups = terms
            .iter()
            .map(|term| TermGroup {
                term: term.term(),
                disciplines: term
                    .disciplines
                    .iter()
                    .map(|discipline| discipline_group(discipline, categories))
                    .collect(),
            })
            .collect();
        return DisciplinesView::ByTerm(groups);
    }

    let matches = terms
        .iter()
        .flat_map(|term| term.disciplines.iter())
        .filter(|discipline| search.matches(&discipline.name))
        .map(|discipline| discipline_group(discipline, categories))
        .collect();
    DisciplinesView::Matches(matches)
}

/// Distinct teacher names in first-seen order.
pub fn unique_teacher_names(records: &[TestsByTeacher]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        if !names.iter().any(|name| name == &record.teacher.name) {
            names.push(record.teacher.name.clone());
        }
    }
    names
}

/// Groups the `groupBy=teachers` response for the instructors page.
///
/// The API sends one record per teacher/discipline pair; records sharing a
/// teacher name collapse into a single group that aggregates the tests of
/// all that teacher's disciplines. A search keeps only the records whose
/// teacher name equals it.
pub fn group_by_teacher(
    records: &[TestsByTeacher],
    categories: &[Category],
    search: &SearchTerm,
) -> Vec<TeacherGroup> {
    unique_teacher_names(records)
        .into_iter()
        .filter(|name| search.matches(name))
        .map(|name| {
            let links: Vec<&TeacherDiscipline> = records
                .iter()
                .filter(|record| record.teacher.name == name)
                .collect();
            TeacherGroup {
                categories: category_groups(&links, categories, TeacherDiscipline::discipline_name),
                name,
            }
        })
        .collect()
}

/// Discipline names across all terms, in response order, for the search
/// suggestions of the disciplines page.
pub fn discipline_names(terms: &[TestsByDiscipline]) -> Vec<String> {
    terms
        .iter()
        .flat_map(|term| term.disciplines.iter())
        .map(|discipline| discipline.name.clone())
        .collect()
}
