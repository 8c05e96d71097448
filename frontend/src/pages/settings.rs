// frontend/src/pages/settings.rs
//
// Settings page. For now it only surfaces the active shell configuration.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::current_config;
use crate::constants::SETTINGS_CONTAINER_ID;
use crate::dom_utils::{append_text, fresh_page_container};

/// Mount (render) the settings page into the main app container.
pub fn mount_settings(document: &Document) -> Result<(), JsValue> {
    let container = fresh_page_container(document, SETTINGS_CONTAINER_ID)?;

    append_text(document, &container, "h2", "Settings")?;

    let config = current_config();
    let list = document.create_element("dl")?;
    list.set_class_name("settings-list");

    let base_path = if config.base_path.is_empty() {
        "/"
    } else {
        config.base_path.as_str()
    };
    append_text(document, &list, "dt", "Base path")?;
    append_text(document, &list, "dd", base_path)?;
    append_text(document, &list, "dt", "Log level")?;
    append_text(document, &list, "dd", &config.log_level)?;

    container.append_child(&list)?;

    Ok(())
}
