use common::grouping::{group_by_teacher, SearchTerm};
use yew::prelude::*;

use super::messages::Msg;
use super::state::InstructorsPage;
use crate::accordion::yw_material_accordion::YwMaterialAccordion;
use crate::components::pages::empty_state;
use crate::components::search_input::SearchInput;
use crate::components::test_list::TestList;

const NO_TESTS_FOR_TEACHER: &str = "Nenhuma prova para essa pessoa instrutora...";

pub fn view(page: &InstructorsPage, ctx: &Context<InstructorsPage>) -> Html {
    let token = ctx.props().token.clone();
    let groups = group_by_teacher(&page.records, &page.categories, &SearchTerm::new(&page.search));

    html! {
        <section class="page instructors-page">
            <div class="page-search">
                <SearchInput
                    label="Pesquise por pessoa instrutora"
                    value={page.search.clone()}
                    options={page.teacher_names()}
                    on_value={ctx.link().callback(Msg::SetSearch)}
                />
            </div>
            <div class="page-content accordion-stack">
                {
                    if groups.is_empty() {
                        empty_state(NO_TESTS_FOR_TEACHER)
                    } else {
                        groups.into_iter().map(|group| html! {
                            <YwMaterialAccordion key={group.name.clone()} title={group.name.clone()}>
                                {
                                    if group.is_empty() {
                                        empty_state(NO_TESTS_FOR_TEACHER)
                                    } else {
                                        group.categories.into_iter().map(|section| html! {
                                            <div class="category-section" key={section.category.id}>
                                                <h4 class="category-title">{ section.category.name.clone() }</h4>
                                                <TestList entries={section.entries} token={token.clone()} />
                                            </div>
                                        }).collect::<Html>()
                                    }
                                }
                            </YwMaterialAccordion>
                        }).collect::<Html>()
                    }
                }
            </div>
        </section>
    }
}
