//! Update function for the create-test page.
//!
//! Field edits go straight into `CreateTestForm`, which owns the rules
//! (teacher cleared on discipline change, stale lookups dropped). This
//! module adds the side effects: API calls spawned on the browser's executor
//! and toasts for their outcome.

use common::auth::AuthToken;
use common::forms::Notice;
use common::model::{Category, Discipline};
use common::{ApiError, Result};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CreateTestPage;
use crate::components::helpers::show_toast;
use crate::services::api;

pub fn update(page: &mut CreateTestPage, ctx: &Context<CreateTestPage>, msg: Msg) -> bool {
    match msg {
        Msg::LoadReferenceData => {
            let Some(token) = ctx.props().token.clone() else {
                return false;
            };
            let id = page.form.begin_reference_load();
            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch_reference_data(&token).await {
                    Ok((categories, disciplines)) => link.send_message(Msg::ReferenceDataLoaded {
                        id,
                        categories,
                        disciplines,
                    }),
                    Err(error) => link.send_message(Msg::ReferenceDataFailed { id, error }),
                }
            });
            false
        }
        Msg::ReferenceDataLoaded {
            id,
            categories,
            disciplines,
        } => {
            let applied = page.form.apply_reference_data(id, &categories, &disciplines);
            if !applied {
                gloo_console::log!("discarding stale reference data");
            }
            applied
        }
        Msg::ReferenceDataFailed { id, error } => {
            if !page.form.is_current_reference_load(id) {
                gloo_console::log!("ignoring failure of a stale reference load");
                return false;
            }
            report_failure("loading reference data", &error);
            false
        }
        Msg::SetName(value) => {
            page.form.set_name(value);
            true
        }
        Msg::SetPdfUrl(value) => {
            page.form.set_pdf_url(value);
            true
        }
        Msg::SetCategory(value) => {
            page.form.set_category(value);
            true
        }
        Msg::SetDiscipline(value) => {
            let Some(token) = ctx.props().token.clone() else {
                return false;
            };
            if let Some(lookup) = page.form.select_discipline(value) {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::get_teachers_by_discipline(&lookup.discipline, &token).await {
                        Ok(teachers) => link.send_message(Msg::TeachersLoaded {
                            id: lookup.id,
                            teachers,
                        }),
                        Err(error) => link.send_message(Msg::TeachersFailed {
                            id: lookup.id,
                            error,
                        }),
                    }
                });
            }
            true
        }
        Msg::TeachersLoaded { id, teachers } => {
            let applied = page.form.apply_teachers(id, teachers);
            if !applied {
                gloo_console::log!("discarding stale teachers response");
            }
            applied
        }
        Msg::TeachersFailed { id, error } => {
            if !page.form.is_current_lookup(id) {
                gloo_console::log!("ignoring failure of a stale teachers lookup");
                return false;
            }
            report_failure("loading teachers", &error);
            false
        }
        Msg::SetTeacher(value) => {
            page.form.set_teacher(value);
            true
        }
        Msg::Submit => {
            let Some((token, request)) = page.form.prepare_submit(ctx.props().token.as_ref())
            else {
                return false;
            };
            page.submitting = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::add_test(&request, &token).await {
                    Ok(()) => link.send_message(Msg::SubmitSucceeded),
                    Err(err) => link.send_message(Msg::SubmitFailed(err)),
                }
            });
            true
        }
        Msg::SubmitSucceeded => {
            page.submitting = false;
            show_toast(&Notice::created());
            page.reload.bump();
            true
        }
        Msg::SubmitFailed(err) => {
            page.submitting = false;
            report_failure("storing the test", &err);
            true
        }
    }
}

fn report_failure(action: &str, err: &ApiError) {
    gloo_console::error!(format!("create test page: {} failed: {}", action, err));
    show_toast(&Notice::from_error(err));
}

async fn fetch_reference_data(token: &AuthToken) -> Result<(Vec<Category>, Vec<Discipline>)> {
    let categories = api::get_categories(token).await?;
    let disciplines = api::get_disciplines(token).await?;
    Ok((categories, disciplines))
}
