//! "Adicionar uma Prova" page: a form that stores a new test.
//!
//! Responsibilities
//! - Load the category and discipline suggestions, and reload them (which
//!   also resets the form) every time the reload signal moves.
//! - Look up the teachers of the chosen discipline; the teacher input stays
//!   disabled until a discipline is chosen.
//! - Submit the form and report the outcome through a toast (in Portuguese).

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CreateTestPage;

use super::PageProps;

impl Component for CreateTestPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CreateTestPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().token != old_props.token {
            self.loaded_generation = None;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    /// Reference data is a function of the reload signal: whenever the
    /// generation on screen differs from the signal, load again.
    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let generation = self.reload.generation();
        if self.loaded_generation != Some(generation) && ctx.props().token.is_some() {
            self.loaded_generation = Some(generation);
            ctx.link().send_message(Msg::LoadReferenceData);
        }
    }
}
