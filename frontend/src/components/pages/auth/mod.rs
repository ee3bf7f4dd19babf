//! Sign-in / sign-up page.
//!
//! Sign-up only registers the account and switches to the sign-in form; a
//! successful sign-in hands the token to the parent through `on_signed_in`.
//! The token is kept in memory only.

use common::auth::AuthToken;
use common::forms::Notice;
use common::requests::UserCredentials;
use common::ApiError;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{input_value, show_toast};
use crate::services::api;

const SIGNED_UP_MESSAGE: &str = "Cadastro realizado com sucesso!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AuthPageProps {
    pub on_signed_in: Callback<AuthToken>,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    SwitchMode(AuthMode),
    Submit,
    SignedUp,
    SignedIn(AuthToken),
    Failed(ApiError),
}

pub struct AuthPage {
    pub mode: AuthMode,
    pub credentials: UserCredentials,
    pub pending: bool,
}

impl Component for AuthPage {
    type Message = Msg;
    type Properties = AuthPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            mode: AuthMode::SignIn,
            credentials: UserCredentials::default(),
            pending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => {
                self.credentials.email = email;
                true
            }
            Msg::SetPassword(password) => {
                self.credentials.password = password;
                true
            }
            Msg::SwitchMode(mode) => {
                self.mode = mode;
                self.credentials.password.clear();
                true
            }
            Msg::Submit => {
                if self.pending {
                    return false;
                }
                self.pending = true;
                let credentials = self.credentials.clone();
                let mode = self.mode;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let msg = match mode {
                        AuthMode::SignUp => match api::sign_up(&credentials).await {
                            Ok(()) => Msg::SignedUp,
                            Err(err) => Msg::Failed(err),
                        },
                        AuthMode::SignIn => match api::sign_in(&credentials).await {
                            Ok(response) => match AuthToken::new(response.token) {
                                Some(token) => Msg::SignedIn(token),
                                None => Msg::Failed(ApiError::Decode("empty token".to_string())),
                            },
                            Err(err) => Msg::Failed(err),
                        },
                    };
                    link.send_message(msg);
                });
                true
            }
            Msg::SignedUp => {
                self.pending = false;
                show_toast(&Notice::success(SIGNED_UP_MESSAGE));
                ctx.link().send_message(Msg::SwitchMode(AuthMode::SignIn));
                true
            }
            Msg::SignedIn(token) => {
                self.pending = false;
                self.credentials = UserCredentials::default();
                ctx.props().on_signed_in.emit(token);
                true
            }
            Msg::Failed(err) => {
                self.pending = false;
                gloo_console::error!(format!("authentication failed: {}", err));
                show_toast(&Notice::from_error(&err));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let (title, submit_label, switch_label, other_mode) = match self.mode {
            AuthMode::SignIn => ("Login", "Entrar", "Não possuo cadastro", AuthMode::SignUp),
            AuthMode::SignUp => ("Cadastro", "Cadastrar", "Já possuo cadastro", AuthMode::SignIn),
        };

        html! {
            <section class="page auth-page">
                <h2 class="page-title">{ title }</h2>
                <form
                    class="auth-form"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <label class="text-field">
                        <span>{ "Email" }</span>
                        <input
                            type="email"
                            name="email"
                            value={self.credentials.email.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetEmail(input_value(&e)))}
                        />
                    </label>
                    <label class="text-field">
                        <span>{ "Senha" }</span>
                        <input
                            type="password"
                            name="password"
                            value={self.credentials.password.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetPassword(input_value(&e)))}
                        />
                    </label>
                    <div class="auth-actions">
                        <button
                            type="button"
                            class="link-btn"
                            onclick={link.callback(move |_| Msg::SwitchMode(other_mode))}
                        >
                            { switch_label }
                        </button>
                        <button class="submit-btn" type="submit" disabled={self.pending}>{ submit_label }</button>
                    </div>
                </form>
            </section>
        }
    }
}
