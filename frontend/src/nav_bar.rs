use yew::{classes, html, Callback, Component, Context, Html, Properties};

/// Pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Disciplines,
    Instructors,
    CreateTest,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Disciplines => "Disciplinas",
            Page::Instructors => "Pessoa Instrutora",
            Page::CreateTest => "Adicionar",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Page,
    pub on_navigate: Callback<Page>,
    pub on_sign_out: Callback<()>,
}

/// Row of page buttons; the active page is rendered as the filled variant.
pub struct NavBar;

impl Component for NavBar {
    type Message = ();
    type Properties = NavBarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        NavBar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let pages = [Page::Disciplines, Page::Instructors, Page::CreateTest];

        html! {
            <nav class="nav-bar">
                {
                    for pages.into_iter().map(|page| {
                        let variant = if page == props.active { "contained" } else { "outlined" };
                        let on_navigate = props.on_navigate.clone();
                        html! {
                            <button
                                class={classes!("nav-btn", variant)}
                                onclick={move |_| on_navigate.emit(page)}
                            >
                                { page.label() }
                            </button>
                        }
                    })
                }
                <button
                    class="nav-btn sign-out"
                    onclick={props.on_sign_out.reform(|_| ())}
                >
                    { "Sair" }
                </button>
            </nav>
        }
    }
}
