use common::auth::AuthToken;
use common::forms::Notice;
use common::model::{Category, TestsByDiscipline};
use common::Result;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DisciplinesPage;
use crate::components::helpers::show_toast;
use crate::services::api;

pub fn update(page: &mut DisciplinesPage, ctx: &Context<DisciplinesPage>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let Some(token) = ctx.props().token.clone() else {
                return false;
            };
            let id = page.loads.issue();
            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch(&token).await {
                    Ok((terms, categories)) => link.send_message(Msg::Loaded {
                        id,
                        terms,
                        categories,
                    }),
                    Err(error) => link.send_message(Msg::LoadFailed { id, error }),
                }
            });
            false
        }
        Msg::Loaded {
            id,
            terms,
            categories,
        } => {
            if !page.loads.is_latest(id) {
                gloo_console::log!("discarding stale disciplines response");
                return false;
            }
            page.terms = terms;
            page.categories = categories;
            true
        }
        Msg::LoadFailed { id, error } => {
            if !page.loads.is_latest(id) {
                gloo_console::log!("ignoring failure of a stale disciplines load");
                return false;
            }
            gloo_console::error!(format!("loading disciplines failed: {}", error));
            show_toast(&Notice::from_error(&error));
            false
        }
        Msg::SetSearch(search) => {
            page.search = search;
            true
        }
    }
}

async fn fetch(token: &AuthToken) -> Result<(Vec<TestsByDiscipline>, Vec<Category>)> {
    let terms = api::get_tests_by_discipline(token).await?;
    let categories = api::get_categories(token).await?;
    Ok((terms, categories))
}
