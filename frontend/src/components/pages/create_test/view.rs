use yew::prelude::*;

use super::messages::Msg;
use super::state::CreateTestPage;
use crate::components::helpers::input_value;
use crate::components::search_input::SearchInput;

pub fn view(page: &CreateTestPage, ctx: &Context<CreateTestPage>) -> Html {
    let link = ctx.link();
    let form = &page.form;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <section class="page create-test-page">
            <h2 class="page-title">{ "Adicionar uma Prova" }</h2>
            <form class="create-test-form" {onsubmit}>
                <label class="text-field">
                    <span>{ "Titulo da prova" }</span>
                    <input
                        type="text"
                        name="name"
                        value={form.name.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))}
                    />
                </label>
                <label class="text-field">
                    <span>{ "PDF da prova" }</span>
                    <input
                        type="url"
                        name="pdfUrl"
                        value={form.pdf_url.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetPdfUrl(input_value(&e)))}
                    />
                </label>
                <SearchInput
                    label="Categoria"
                    value={form.category_name.clone()}
                    options={form.categories.clone()}
                    on_value={link.callback(Msg::SetCategory)}
                />
                <SearchInput
                    label="Disciplina"
                    value={form.discipline_name.clone()}
                    options={form.disciplines.clone()}
                    commit_on_change={true}
                    on_value={link.callback(Msg::SetDiscipline)}
                />
                <SearchInput
                    label="Pessoa Instrutora"
                    value={form.teacher_name.clone()}
                    options={form.teachers.clone()}
                    disabled={!form.teacher_enabled()}
                    on_value={link.callback(Msg::SetTeacher)}
                />
                <button class="submit-btn" type="submit" disabled={page.submitting}>{ "Enviar" }</button>
            </form>
        </section>
    }
}
