//! Page elements backing the filter view.

use crate::PageConfig;
use skyfilter_core::{ImageEntry, Switch};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlImageElement, HtmlInputElement};

/// Switch and image elements, queried once when the page is bound.
pub struct PageElements {
    pub switches: Vec<HtmlInputElement>,
    pub images: Vec<HtmlImageElement>,
}

impl PageElements {
    pub fn query(document: &Document, config: &PageConfig) -> Result<Self, JsValue> {
        let switches = query_all::<HtmlInputElement>(document, &config.switch_selector)?;
        let images = query_all::<HtmlImageElement>(document, &config.image_selector)?;

        if switches.is_empty() {
            log::warn!("No switches match {:?}", config.switch_selector);
        }
        if images.is_empty() {
            log::warn!("No images match {:?}", config.image_selector);
        }

        Ok(Self { switches, images })
    }

    /// Current switch names and states, in document order.
    pub fn switch_states(&self) -> Vec<Switch> {
        self.switches
            .iter()
            .map(|input| Switch::new(input.name(), input.checked()))
            .collect()
    }

    pub fn checked_states(&self) -> impl Iterator<Item = bool> + '_ {
        self.switches.iter().map(|input| input.checked())
    }

    /// Image sources as written in the markup.
    pub fn image_entries(&self) -> Vec<ImageEntry> {
        self.images
            .iter()
            .map(|img| ImageEntry::new(img.get_attribute("src").unwrap_or_else(|| img.src())))
            .collect()
    }

    /// Mirror the view model's visibility onto the `hidden` attribute.
    pub fn apply_visibility(&self, entries: &[ImageEntry]) {
        for (img, entry) in self.images.iter().zip(entries) {
            img.set_hidden(!entry.visible);
        }
    }
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);

    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        match node.dyn_into::<T>() {
            Ok(element) => elements.push(element),
            Err(_) => log::warn!(
                "Skipping element {} matched by {:?}: unexpected element type",
                index,
                selector
            ),
        }
    }

    Ok(elements)
}
