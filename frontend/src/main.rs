use crate::app::App;

mod app;
mod client;
mod components;
mod config;
mod helpers;

fn main() {
    yew::Renderer::<App>::new().render();
}
