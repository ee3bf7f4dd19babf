//! Properties shared by the authenticated pages.

use common::auth::AuthToken;
use yew::prelude::*;

/// Data every page receives from `App`.
#[derive(Properties, PartialEq, Clone)]
pub struct PageProps {
    /// Session token for the API.
    ///
    /// Pages never read it from anywhere else. While it is `None` they send
    /// no request and show whatever they last loaded; when it changes they
    /// load again, as on first render.
    #[prop_or_default]
    pub token: Option<AuthToken>,
}
