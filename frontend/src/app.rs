use common::auth::AuthToken;
use yew::{html, Component, Context, Html};

use crate::components::pages::auth::AuthPage;
use crate::components::pages::create_test::CreateTestPage;
use crate::components::pages::disciplines::DisciplinesPage;
use crate::components::pages::instructors::InstructorsPage;
use crate::nav_bar::{NavBar, Page};

pub enum Msg {
    SignedIn(AuthToken),
    SignOut,
    Navigate(Page),
}

/// Root component. Owns the session token and the active page, and passes
/// the token down to every page explicitly.
pub struct App {
    token: Option<AuthToken>,
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            token: None,
            page: Page::Disciplines,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SignedIn(token) => {
                self.token = Some(token);
                self.page = Page::Disciplines;
                true
            }
            Msg::SignOut => {
                self.token = None;
                true
            }
            Msg::Navigate(page) => {
                if self.page == page {
                    return false;
                }
                self.page = page;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if self.token.is_none() {
            return html! {
                <main class="app">
                    <AuthPage on_signed_in={link.callback(Msg::SignedIn)} />
                </main>
            };
        }

        let token = self.token.clone();
        html! {
            <main class="app">
                <NavBar
                    active={self.page}
                    on_navigate={link.callback(Msg::Navigate)}
                    on_sign_out={link.callback(|_| Msg::SignOut)}
                />
                {
                    match self.page {
                        Page::Disciplines => html! { <DisciplinesPage {token} /> },
                        Page::Instructors => html! { <InstructorsPage {token} /> },
                        Page::CreateTest => html! { <CreateTestPage {token} /> },
                    }
                }
            </main>
        }
    }
}
