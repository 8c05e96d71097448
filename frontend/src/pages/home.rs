// frontend/src/pages/home.rs
//
// Landing page. Also where every unknown path ends up after the redirect.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::HOME_CONTAINER_ID;
use crate::dom_utils::{append_text, fresh_page_container};
use crate::pages::Page;
use crate::ui::nav::create_link;

/// Mount (render) the home page into the main app container.
pub fn mount_home(document: &Document) -> Result<(), JsValue> {
    let container = fresh_page_container(document, HOME_CONTAINER_ID)?;

    append_text(document, &container, "h2", "Welcome")?;
    append_text(
        document,
        &container,
        "p",
        "Start a conversation or adjust your preferences.",
    )?;

    // Quick links mirror the nav bar so the landing page is never a dead end
    let links = document.create_element("div")?;
    links.set_class_name("home-links");
    let chat = create_link(document, Page::Chat, "Open chat")?;
    let settings = create_link(document, Page::Settings, "Settings")?;
    links.append_child(&chat)?;
    links.append_child(&settings)?;
    container.append_child(&links)?;

    Ok(())
}
