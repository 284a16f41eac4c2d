/// Snippet Sidebar - browser extension panel for saving and copying text snippets
/// Built with Rust + WASM + Yew

pub mod config;
pub mod error;
pub mod host;
pub mod manager;
pub mod render;
pub mod storage;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the sidebar with default settings
#[wasm_bindgen]
pub fn start_sidebar() {
    yew::Renderer::<ui::sidebar::Sidebar>::new().render();
}

// Start the sidebar with a partial settings object from the host page
#[wasm_bindgen]
pub fn start_sidebar_with_config(settings: JsValue) -> Result<(), JsValue> {
    let config: config::SidebarConfig = if settings.is_null() || settings.is_undefined() {
        config::SidebarConfig::default()
    } else {
        serde_wasm_bindgen::from_value(settings)
            .map_err(|e| JsValue::from_str(&format!("Invalid sidebar config: {:?}", e)))?
    };

    yew::Renderer::<ui::sidebar::Sidebar>::with_props(ui::sidebar::SidebarProps { config }).render();
    Ok(())
}
