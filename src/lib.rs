//! Administrative console for an academic records service.
//!
//! Client-side rendered Leptos application covering students, subjects and
//! enrollments. All data lives behind a remote HTTP API reached with a
//! bearer token obtained at login; this crate only renders, validates and
//! submits.

pub mod api;
pub mod config;
pub mod frontend;
pub mod models;
pub mod session;

/// WASM entry point, mounts the application into the document body.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(frontend::App);
}
