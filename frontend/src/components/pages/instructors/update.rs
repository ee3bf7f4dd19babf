use common::auth::AuthToken;
use common::forms::Notice;
use common::model::{Category, Teacher, TestsByTeacher};
use common::Result;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::InstructorsPage;
use crate::components::helpers::show_toast;
use crate::services::api;

pub fn update(page: &mut InstructorsPage, ctx: &Context<InstructorsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let Some(token) = ctx.props().token.clone() else {
                return false;
            };
            let id = page.loads.issue();
            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch(&token).await {
                    Ok((records, categories, teachers)) => link.send_message(Msg::Loaded {
                        id,
                        records,
                        categories,
                        teachers,
                    }),
                    Err(error) => link.send_message(Msg::LoadFailed { id, error }),
                }
            });
            false
        }
        Msg::Loaded {
            id,
            records,
            categories,
            teachers,
        } => {
            if !page.loads.is_latest(id) {
                gloo_console::log!("discarding stale instructors response");
                return false;
            }
            page.records = records;
            page.categories = categories;
            page.teachers = teachers;
            true
        }
        Msg::LoadFailed { id, error } => {
            if !page.loads.is_latest(id) {
                gloo_console::log!("ignoring failure of a stale instructors load");
                return false;
            }
            gloo_console::error!(format!("loading instructors failed: {}", error));
            show_toast(&Notice::from_error(&error));
            false
        }
        Msg::SetSearch(search) => {
            page.search = search;
            true
        }
    }
}

async fn fetch(token: &AuthToken) -> Result<(Vec<TestsByTeacher>, Vec<Category>, Vec<Teacher>)> {
    let records = api::get_tests_by_teacher(token).await?;
    let categories = api::get_categories(token).await?;
    let teachers = api::get_teachers(token).await?;
    Ok((records, categories, teachers))
}
