// frontend/src/pages/chat.rs
//
// Chat page shell. The conversation widgets live elsewhere; this only
// provides the regions they attach to.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::CHAT_CONTAINER_ID;
use crate::dom_utils::{append_text, fresh_page_container};

const MESSAGES_ID: &str = "chat-messages";
const INPUT_ID: &str = "chat-input";

/// Mount (render) the chat page into the main app container.
pub fn mount_chat(document: &Document) -> Result<(), JsValue> {
    let container = fresh_page_container(document, CHAT_CONTAINER_ID)?;

    append_text(document, &container, "h2", "Chat")?;

    let messages = document.create_element("div")?;
    messages.set_id(MESSAGES_ID);
    messages.set_class_name("chat-messages");
    messages.set_attribute("role", "log")?;
    messages.set_attribute("aria-live", "polite")?;
    container.append_child(&messages)?;

    let input = document.create_element("textarea")?;
    input.set_id(INPUT_ID);
    input.set_class_name("chat-input");
    input.set_attribute("placeholder", "Type a message…")?;
    container.append_child(&input)?;

    Ok(())
}
