// frontend/src/pages/mod.rs
//
// Page-level components: one per top-level route. The set is closed, so a
// plain enum carries the dispatch and each variant forwards to its module.

pub mod chat;
pub mod home;
pub mod settings;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::{
    CHAT_CONTAINER_ID, CHAT_TITLE, HOME_CONTAINER_ID, HOME_TITLE, SETTINGS_CONTAINER_ID,
    SETTINGS_TITLE,
};

/// Anything the renderer can put on screen.
pub trait Renderable {
    /// Human readable title, also used for `document.title`.
    fn title(&self) -> &'static str;

    /// Id of the element the page mounts into.
    fn container_id(&self) -> &'static str;

    /// Build (or refresh) the page's DOM inside `#app-container`.
    fn mount(&self, document: &Document) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Chat,
    Settings,
}

impl Page {
    /// Every page in navigation order.
    pub const ALL: [Page; 3] = [Page::Home, Page::Chat, Page::Settings];

    /// Stable lowercase name, matching the serde representation.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Chat => "chat",
            Page::Settings => "settings",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

impl Renderable for Page {
    fn title(&self) -> &'static str {
        match self {
            Page::Home => HOME_TITLE,
            Page::Chat => CHAT_TITLE,
            Page::Settings => SETTINGS_TITLE,
        }
    }

    fn container_id(&self) -> &'static str {
        match self {
            Page::Home => HOME_CONTAINER_ID,
            Page::Chat => CHAT_CONTAINER_ID,
            Page::Settings => SETTINGS_CONTAINER_ID,
        }
    }

    fn mount(&self, document: &Document) -> Result<(), JsValue> {
        match self {
            Page::Home => home::mount_home(document),
            Page::Chat => chat::mount_chat(document),
            Page::Settings => settings::mount_settings(document),
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
