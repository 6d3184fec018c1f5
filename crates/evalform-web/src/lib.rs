mod app;
mod components;
mod pages;
mod sink;

use wasm_bindgen::prelude::wasm_bindgen;

pub use app::App;
pub use sink::ConsoleSink;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
