use crate::app::App;

mod accordion;
mod app;
mod components;
mod config;
mod nav_bar;
mod services;

fn main() {
    yew::Renderer::<App>::new().render();
}
