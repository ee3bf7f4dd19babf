use common::auth::AuthToken;
use common::grouping::{
    discipline_names, group_by_discipline, CategoryGroup, DisciplineGroup, DisciplinesView,
    SearchTerm, TermGroup,
};
use yew::prelude::*;

use super::messages::Msg;
use super::state::DisciplinesPage;
use crate::accordion::yw_material_accordion::YwMaterialAccordion;
use crate::components::pages::empty_state;
use crate::components::search_input::SearchInput;
use crate::components::test_list::TestList;

const NO_TESTS_FOR_TERM: &str = "Nenhuma prova para esse período...";
const NO_TESTS_FOR_DISCIPLINE: &str = "Nenhuma prova para essa disciplina...";
const NO_MATCHING_DISCIPLINE: &str = "Nenhuma disciplina encontrada com esse nome...";

pub fn view(page: &DisciplinesPage, ctx: &Context<DisciplinesPage>) -> Html {
    let token = ctx.props().token.clone();
    let search = SearchTerm::new(&page.search);
    let grouped = group_by_discipline(&page.terms, &page.categories, &search);

    html! {
        <section class="page disciplines-page">
            <div class="page-search">
                <SearchInput
                    label="Pesquise por disciplina"
                    value={page.search.clone()}
                    options={discipline_names(&page.terms)}
                    on_value={ctx.link().callback(Msg::SetSearch)}
                />
            </div>
            <div class="page-content">
                {
                    match grouped {
                        DisciplinesView::ByTerm(terms) => terms_accordions(terms, &token),
                        DisciplinesView::Matches(disciplines) => {
                            disciplines_accordions(disciplines, NO_MATCHING_DISCIPLINE, &token)
                        }
                    }
                }
            </div>
        </section>
    }
}

fn terms_accordions(terms: Vec<TermGroup>, token: &Option<AuthToken>) -> Html {
    html! {
        <div class="accordion-stack">
            {
                for terms.into_iter().map(|group| html! {
                    <YwMaterialAccordion key={group.term.id} title={format!("{} Período", group.term.number)}>
                        { disciplines_accordions(group.disciplines, NO_TESTS_FOR_TERM, token) }
                    </YwMaterialAccordion>
                })
            }
        </div>
    }
}

/// `when_empty` is shown when there is no discipline at all.
fn disciplines_accordions(
    disciplines: Vec<DisciplineGroup>,
    when_empty: &'static str,
    token: &Option<AuthToken>,
) -> Html {
    if disciplines.is_empty() {
        return empty_state(when_empty);
    }

    html! {
        <>
            {
                for disciplines.into_iter().map(|discipline| html! {
                    <YwMaterialAccordion key={discipline.id} title={discipline.name.clone()} flat={true}>
                        {
                            if discipline.is_empty() {
                                empty_state(NO_TESTS_FOR_DISCIPLINE)
                            } else {
                                category_sections(discipline.categories, token)
                            }
                        }
                    </YwMaterialAccordion>
                })
            }
        </>
    }
}

fn category_sections(categories: Vec<CategoryGroup>, token: &Option<AuthToken>) -> Html {
    html! {
        <>
            {
                for categories.into_iter().map(|section| html! {
                    <div class="category-section" key={section.category.id}>
                        <h4 class="category-title">{ section.category.name.clone() }</h4>
                        <TestList entries={section.entries} token={token.clone()} />
                    </div>
                })
            }
        </>
    }
}
