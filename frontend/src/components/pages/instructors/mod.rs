//! Instructors page: tests grouped by teacher.
//!
//! The API sends one record per teacher and discipline; the page shows one
//! accordion per teacher name, with category sections listing the tests of
//! all that teacher's disciplines.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::InstructorsPage;

use super::PageProps;

impl Component for InstructorsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        InstructorsPage::new()
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
