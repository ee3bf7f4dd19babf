//! Small utilities shared by the pages.
//!
//! - **User feedback**: transient toast notifications for `Notice`s.
//! - **Formatting**: view counters with Brazilian digit grouping.
//! - **Input events**: reading the current value out of an `<input>`.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use common::forms::{Notice, NoticeKind};

/// How long a toast stays on screen, in milliseconds.
const TOAST_DURATION_MS: u32 = 3000;

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is injected straight into `<body>` so any page can raise one
/// without owning a notification area, and removes itself after
/// `TOAST_DURATION_MS`. Success and error notices only differ in colour.
pub fn show_toast(notice: &Notice) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(&notice.text));
    let html_toast: HtmlElement = toast.unchecked_into();
    let background = match notice.kind {
        NoticeKind::Success => "rgba(46, 125, 50, 0.95)",
        NoticeKind::Error => "rgba(198, 40, 40, 0.95)",
    };
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Roboto, Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// `"Visualizações: 1.234"`.
pub fn views_label(views: u64) -> String {
    format!("Visualizações: {}", views.to_formatted_string(&Locale::pt))
}

/// Current value of the `<input>` that fired `e`.
pub fn input_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}
