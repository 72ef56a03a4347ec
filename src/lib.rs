/// What Reddit Says - Chrome Extension showing Reddit discussions of the current page
/// Built with Rust + WASM + Yew

pub mod canonical;
pub mod config;
pub mod error;
pub mod extract;
pub mod listing;
pub mod search;
pub mod tab_data;
pub mod time_since;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export canonicalization for JavaScript access
#[wasm_bindgen]
pub fn canonicalize_url(url: &str) -> Result<String, JsError> {
    canonical::canonicalize(url).map_err(|e| JsError::new(&e.to_string()))
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
