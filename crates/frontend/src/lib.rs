pub mod app;
pub mod health;
pub mod layout;
pub mod params;
pub mod shared;
pub mod state;
pub mod transfer;
pub mod upload;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
