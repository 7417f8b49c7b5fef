mod app;
mod components;
mod editor;
mod layer_actions;
mod layers_panel;

pub mod config;
pub mod error;
pub mod scene;
pub mod types;
pub mod utils;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
