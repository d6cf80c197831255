//! Page configuration: filter conventions plus where to find the controls.
//!
//! Every field is optional when passed from JavaScript; missing fields fall
//! back to the defaults below.

use gloo_utils::format::JsValueSerdeExt;
use serde::{Deserialize, Serialize};
use skyfilter_core::FilterConfig;
use wasm_bindgen::JsValue;

/// Selector matching the colour switches.
pub const SWITCH_SELECTOR: &str = ".custom-switch-input";
/// Selector matching the pre-rendered sky plot images.
pub const IMAGE_SELECTOR: &str = ".sky-plots img";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    #[serde(flatten)]
    pub filter: FilterConfig,
    pub switch_selector: String,
    pub image_selector: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            switch_selector: SWITCH_SELECTOR.to_string(),
            image_selector: IMAGE_SELECTOR.to_string(),
        }
    }
}

impl PageConfig {
    /// Read a config object passed from JavaScript. `undefined` and `null`
    /// give the defaults.
    pub fn from_js(value: &JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = value
            .into_serde()
            .map_err(|e| JsValue::from_str(&format!("Parse config: {}", e)))?;
        config
            .filter
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(config)
    }
}
