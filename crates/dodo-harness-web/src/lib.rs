//! Dodo Payments test harness – web frontend
//!
//! Leptos-based WASM frontend: four routed views over one shared
//! [`ApiClient`](dodo_harness_core::ApiClient).

mod api;
mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
