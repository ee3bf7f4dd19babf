//! Disciplines page: tests grouped by term and discipline.
//!
//! Loads `/tests?groupBy=disciplines` and `/categories` for the current
//! token, then derives the accordions from them on every render. Typing in
//! the search box narrows the page to the disciplines with exactly that
//! name, across all terms.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DisciplinesPage;

use super::PageProps;

impl Component for DisciplinesPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DisciplinesPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().token != old_props.token {
            self.loaded = false;
            self.loads.invalidate();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !self.loaded && ctx.props().token.is_some() {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }
}
