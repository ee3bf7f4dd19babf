//! Links to the test documents of one category section.
//!
//! Opening a test also asks the API to count the view. That request is
//! fire-and-forget: the link opens regardless, failures are only logged and
//! the counter on screen is not touched (the server owns it).

use common::auth::AuthToken;
use common::grouping::TestEntry;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::views_label;
use crate::services::api;

#[derive(Properties, PartialEq, Clone)]
pub struct TestListProps {
    pub entries: Vec<TestEntry>,
    pub token: Option<AuthToken>,
}

pub enum Msg {
    Opened(u64),
}

pub struct TestList;

impl Component for TestList {
    type Message = Msg;
    type Properties = TestListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TestList
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Opened(id) => {
                let Some(token) = ctx.props().token.clone() else {
                    return false;
                };
                spawn_local(async move {
                    if let Err(err) = api::count_view(id, &token).await {
                        gloo_console::warn!(format!("count view for test {} failed: {}", id, err));
                    }
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <ul class="test-list">
                {
                    for ctx.props().entries.iter().map(|entry| {
                        let id = entry.test.id;
                        html! {
                            <li class="test-row" key={id}>
                                <a
                                    class="test-link"
                                    href={entry.test.pdf_url.clone()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    onclick={link.callback(move |_: MouseEvent| Msg::Opened(id))}
                                >
                                    { entry.display_label() }
                                </a>
                                <span class="test-views">{ views_label(entry.test.views) }</span>
                            </li>
                        }
                    })
                }
            </ul>
        }
    }
}
