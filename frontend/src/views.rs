// frontend/src/views.rs
//
// Renders pages into the document based on the page the router picked.
//
use std::fmt::Debug;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::APP_TITLE;
use crate::dom_utils::{hide, show};
use crate::pages::{Page, Renderable};

/// Something that can put a page on screen.
pub trait Renderer {
    type Error: Debug;

    fn mount(&mut self, page: Page) -> Result<(), Self::Error>;
}

/// Renderer backed by the live document.
pub struct DomRenderer {
    document: Document,
}

impl DomRenderer {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document on window"))?;
        Ok(Self::new(document))
    }
}

impl Renderer for DomRenderer {
    type Error = JsValue;

    fn mount(&mut self, page: Page) -> Result<(), JsValue> {
        render_page(page, &self.document)
    }
}

// Show `page` and hide every other page container
pub fn render_page(page: Page, document: &Document) -> Result<(), JsValue> {
    for other in Page::ALL.iter().filter(|p| **p != page) {
        if let Some(el) = document.get_element_by_id(other.container_id()) {
            hide(&el);
        }
    }

    page.mount(document)?;

    if let Some(el) = document.get_element_by_id(page.container_id()) {
        show(&el);
    }

    crate::ui::nav::update_active_link(document, page);
    document.set_title(&format!("{} · {}", page.title(), APP_TITLE));

    crate::debug_log!(%page, "mounted");
    Ok(())
}
