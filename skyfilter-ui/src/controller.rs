//! Binds the filter view to the page and recomputes on every switch click.

use crate::{PageConfig, PageElements};
use skyfilter_core::FilterView;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub struct FilterController {
    view: FilterView,
    page: PageElements,
}

impl FilterController {
    /// Bind to the current window's document.
    pub fn bind(config: PageConfig) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        Self::bind_to(&document, config)
    }

    /// Query switches and images once and build the view model from them.
    pub fn bind_to(document: &Document, config: PageConfig) -> Result<Self, JsValue> {
        let page = PageElements::query(document, &config)?;
        let view = FilterView::new(config.filter, page.switch_states(), page.image_entries())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!(
            "Bound {} switches and {} images",
            view.switches().len(),
            view.images().len()
        );
        view.validate().log();

        Ok(Self { view, page })
    }

    pub fn view(&self) -> &FilterView {
        &self.view
    }

    /// Read every switch, re-evaluate every image, and update the page.
    pub fn refresh(&mut self) -> Vec<usize> {
        self.view.sync_switches(self.page.checked_states());
        let visible = self.view.recompute();
        self.page.apply_visibility(self.view.images());
        visible
    }

    /// Sync the page once, then refresh on every switch click.
    pub fn install(self) -> Result<Rc<RefCell<Self>>, JsValue> {
        let switches = self.page.switches.clone();
        let controller = Rc::new(RefCell::new(self));
        controller.borrow_mut().refresh();

        for switch in &switches {
            let handle = Rc::clone(&controller);
            let on_click = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Ok(mut controller) = handle.try_borrow_mut() {
                    controller.refresh();
                } else {
                    log::warn!("Switch click ignored: filter is already refreshing");
                }
            }) as Box<dyn FnMut(_)>);

            switch.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }

        Ok(controller)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlImageElement, HtmlInputElement};

    wasm_bindgen_test_configure!(run_in_browser);

    const MARKUP: &str = r#"
        <input type="checkbox" class="custom-switch-input" name="status_red">
        <input type="checkbox" class="custom-switch-input" name="status_green">
        <input type="checkbox" class="custom-switch-input" name="status_blue">
        <div class="sky-plots">
            <img src="/static/images/skyplots/red.png">
            <img src="/static/images/skyplots/blue.png">
            <img src="/static/images/skyplots/red_blue.png">
            <img src="/static/images/skyplots/red_blue_green.png">
            <img src="/static/images/skyplots/blank.png">
        </div>
    "#;

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Mount the fixture under a unique id so tests don't see each other's elements.
    fn mount(id: &str) -> (Element, PageConfig) {
        let document = document();
        let container = document.create_element("div").unwrap();
        container.set_id(id);
        container.set_inner_html(MARKUP);
        document.body().unwrap().append_child(&container).unwrap();

        let config = PageConfig {
            switch_selector: format!("#{} .custom-switch-input", id),
            image_selector: format!("#{} .sky-plots img", id),
            ..Default::default()
        };
        (container, config)
    }

    fn switch(id: &str, name: &str) -> HtmlInputElement {
        document()
            .query_selector(&format!("#{} input[name='{}']", id, name))
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn shown(id: &str) -> Vec<String> {
        let nodes = document()
            .query_selector_all(&format!("#{} .sky-plots img", id))
            .unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<HtmlImageElement>().ok())
            .filter(|img| !img.hidden())
            .filter_map(|img| img.get_attribute("src"))
            .collect()
    }

    #[wasm_bindgen_test]
    fn install_shows_blank_image() {
        let (container, config) = mount("install-blank");
        let controller = FilterController::bind_to(&document(), config).unwrap();
        controller.install().unwrap();

        assert_eq!(
            shown("install-blank"),
            vec!["/static/images/skyplots/blank.png"]
        );
        container.remove();
    }

    #[wasm_bindgen_test]
    fn clicks_reveal_matching_image() {
        let id = "clicks-reveal";
        let (container, config) = mount(id);
        let controller = FilterController::bind_to(&document(), config)
            .unwrap()
            .install()
            .unwrap();

        switch(id, "status_red").click();
        assert_eq!(shown(id), vec!["/static/images/skyplots/red.png"]);

        switch(id, "status_blue").click();
        assert_eq!(shown(id), vec!["/static/images/skyplots/red_blue.png"]);
        assert_eq!(
            controller.borrow().view().selection().tokens(),
            &["red", "blue"]
        );

        switch(id, "status_red").click();
        switch(id, "status_blue").click();
        assert_eq!(shown(id), vec!["/static/images/skyplots/blank.png"]);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn unmatched_selection_hides_everything() {
        let id = "unmatched";
        let (container, config) = mount(id);
        FilterController::bind_to(&document(), config)
            .unwrap()
            .install()
            .unwrap();

        // No green.png in the fixture
        switch(id, "status_green").click();
        assert!(shown(id).is_empty());
        container.remove();
    }

    #[wasm_bindgen_test]
    fn refresh_reads_state_set_without_click() {
        let id = "refresh-direct";
        let (container, config) = mount(id);
        let mut controller = FilterController::bind_to(&document(), config).unwrap();

        switch(id, "status_blue").set_checked(true);
        let visible = controller.refresh();
        assert_eq!(visible, vec![1]);
        assert_eq!(controller.refresh(), visible);
        container.remove();
    }
}
