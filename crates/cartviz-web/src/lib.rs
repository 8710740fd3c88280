//! Cartpole visualizer widget.
//!
//! Embedded in an iframe; the host page posts iteration updates to it and the
//! widget keeps drawing the last accepted state.

use wasm_bindgen::prelude::*;

mod app;
mod asset;
pub mod config;
mod dom;
mod listener;
mod render;
pub mod visualizer;

pub use config::Config;
pub use visualizer::Visualizer;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook_set();
    app::mount();
}

/// Tear the widget down: listeners are removed, the render loop stops and the
/// canvas leaves the page.
#[wasm_bindgen]
pub fn unmount() {
    app::unmount();
}

fn console_error_panic_hook_set() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        web_sys::console::error_1(&msg.into());
    }));
}
