pub mod auth;
pub mod create_test;
pub mod disciplines;
pub mod instructors;
pub mod props;

pub use props::PageProps;

use yew::prelude::*;

/// Placeholder shown where a group has no tests.
pub(crate) fn empty_state(message: &'static str) -> Html {
    html! { <p class="empty-state">{ message }</p> }
}
