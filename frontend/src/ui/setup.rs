use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::constants::APP_TITLE;
use crate::dom_utils::app_container;

/// Header, navigation bar and the page container. Safe to call twice.
pub fn create_base_ui(document: &Document) -> Result<(), JsValue> {
    let body = document.body().ok_or(JsValue::from_str("No body found"))?;

    if document.get_element_by_id("header").is_none() {
        let header = document.create_element("header")?;
        header.set_id("header");
        header.set_class_name("header");

        let title = document.create_element("h1")?;
        title.set_text_content(Some(APP_TITLE));
        header.append_child(&title)?;

        // Keep the header above whatever the host page already rendered
        body.prepend_with_node_1(&header)?;
    }

    crate::ui::nav::create_nav(document)?;

    // Make sure pages have somewhere to go
    app_container(document)?;

    Ok(())
}
