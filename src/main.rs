mod components;
mod config;
mod error;
mod events;
mod hooks;
mod model;
mod state;
mod storage;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
