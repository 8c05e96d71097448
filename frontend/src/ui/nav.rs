//! Top navigation bar.
//!
//! Links carry real hrefs (so middle-click / open-in-new-tab work) and
//! intercept plain left clicks to navigate client-side.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::config::current_config;
use crate::constants::{HOME_PATH, NAV_CONTAINER_ID};
use crate::dom_utils::{set_active, set_inactive};
use crate::messages::Message;
use crate::pages::{Page, Renderable};
use crate::router::app_routes;
use crate::router::path::with_base;
use crate::state::dispatch_global_message;

fn nav_link_id(page: Page) -> String {
    format!("nav-link-{}", page.slug())
}

fn href_for(page: Page) -> String {
    let path = app_routes().path_for(page).unwrap_or(HOME_PATH);
    with_base(path, &current_config().base_path)
}

/// Anchor pointing at `page` with a client-side click handler.
pub fn create_link(document: &Document, page: Page, label: &str) -> Result<Element, JsValue> {
    let link = document.create_element("a")?;
    link.set_attribute("href", &href_for(page))?;
    link.set_attribute("data-page", page.slug())?;
    link.set_class_name("page-link");
    link.set_text_content(Some(label));

    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        // Let the browser handle new-tab / new-window gestures
        if event.button() != 0
            || event.ctrl_key()
            || event.meta_key()
            || event.shift_key()
            || event.alt_key()
        {
            return;
        }
        event.prevent_default();
        dispatch_global_message(Message::NavigateTo(page));
    }) as Box<dyn FnMut(_)>);

    link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(link)
}

/// Build `<nav id="nav-container">` once, right after the header.
pub fn create_nav(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(NAV_CONTAINER_ID).is_some() {
        return Ok(());
    }

    let nav = document.create_element("nav")?;
    nav.set_id(NAV_CONTAINER_ID);
    nav.set_class_name("nav-container");

    for page in Page::ALL {
        let link = create_link(document, page, page.title())?;
        link.set_id(&nav_link_id(page));
        set_inactive(&link);
        nav.append_child(&link)?;
    }

    match document.get_element_by_id("header") {
        Some(header) => header.append_child(&nav)?,
        None => document
            .body()
            .ok_or(JsValue::from_str("No body found"))?
            .append_child(&nav)?,
    };

    Ok(())
}

/// Highlight the link for `page`.
pub fn update_active_link(document: &Document, page: Page) {
    for candidate in Page::ALL {
        if let Some(link) = document.get_element_by_id(&nav_link_id(candidate)) {
            if candidate == page {
                set_active(&link);
            } else {
                set_inactive(&link);
            }
        }
    }
}

/// Rewrite every page link's href, e.g. after the base path changed.
pub fn refresh_hrefs(document: &Document) -> Result<(), JsValue> {
    let links = document.query_selector_all("a[data-page]")?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if let Some(page) = link.get_attribute("data-page").as_deref().and_then(Page::from_slug) {
            link.set_attribute("href", &href_for(page))?;
        }
    }
    Ok(())
}
