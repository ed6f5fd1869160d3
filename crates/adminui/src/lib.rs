pub mod classify;
pub mod controller;
pub mod level;
pub mod plan;

use wasm_bindgen::prelude::wasm_bindgen;

/// Attach the tab visibility controller to the current page.
///
/// Exported so a host that replaces the edit-form markup wholesale can
/// re-attach manually; normally `start` takes care of it.
#[wasm_bindgen]
pub fn bind() {
    controller::bind();
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    controller::bind_on_ready();
}
