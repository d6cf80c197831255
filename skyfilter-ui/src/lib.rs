mod config;
mod controller;
mod dom;

pub use config::{PageConfig, IMAGE_SELECTOR, SWITCH_SELECTOR};
pub use controller::FilterController;
pub use dom::PageElements;

use gloo_utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Bind the colour filter to the page using the default conventions.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    start_with_config(JsValue::UNDEFINED)
}

/// Bind the colour filter to the page, overriding any config fields given.
#[wasm_bindgen]
pub fn start_with_config(config: JsValue) -> Result<(), JsValue> {
    init_logging();
    let config = PageConfig::from_js(&config)?;
    // Listeners keep the controller alive for the page's lifetime
    FilterController::bind(config)?.install()?;
    Ok(())
}

/// The colour catalogue (defaults, or the `colours` override in `config`),
/// for rendering a legend.
#[wasm_bindgen]
pub fn colour_legend(config: JsValue) -> Result<JsValue, JsValue> {
    let config = PageConfig::from_js(&config)?;
    JsValue::from_serde(&config.filter.colours)
        .map_err(|e| JsValue::from_str(&format!("Serialize colours: {}", e)))
}
