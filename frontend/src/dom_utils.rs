//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for the show / hide / activate patterns used by the
//! renderer and the page modules, so `class_list()` calls do not end up
//! sprinkled across the code-base.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::APP_CONTAINER_ID;

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

/// Mark a nav link as the current one.
pub fn set_active(link: &Element) {
    link.set_class_name("nav-link active");
    let _ = link.set_attribute("aria-current", "page");
}

/// Remove the `active` modifier from a nav link.
pub fn set_inactive(link: &Element) {
    link.set_class_name("nav-link");
    let _ = link.remove_attribute("aria-current");
}

/// Look up `#app-container`, creating it under `<body>` when the host page
/// did not provide one.
pub fn app_container(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(APP_CONTAINER_ID) {
        return Ok(el);
    }

    let el = document.create_element("div")?;
    el.set_id(APP_CONTAINER_ID);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
    body.append_child(&el)?;
    Ok(el)
}

/// Return the page container with the given id, creating it inside
/// `#app-container` if needed. Existing children are removed so the caller
/// can re-render from scratch.
pub fn fresh_page_container(document: &Document, id: &str) -> Result<Element, JsValue> {
    let container = match document.get_element_by_id(id) {
        Some(el) => el,
        None => {
            let el = document.create_element("div")?;
            el.set_id(id);
            el.set_class_name("page-container");
            app_container(document)?.append_child(&el)?;
            el
        }
    };

    while let Some(child) = container.first_child() {
        let _ = container.remove_child(&child);
    }

    Ok(container)
}

/// Append `<tag>text</tag>` to `parent` and return the new element.
pub fn append_text(
    document: &Document,
    parent: &Element,
    tag: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_text_content(Some(text));
    parent.append_child(&el)?;
    Ok(el)
}
