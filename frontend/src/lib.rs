use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Export convenience macros crate-wide
#[macro_use]
mod macros;

pub mod command_executors;
pub mod config;
pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod history;
pub mod logging;
pub mod messages;
pub mod navigation;
pub mod pages;
pub mod router;
pub mod state;
pub mod ui;
pub mod update;
pub mod views;

pub use error::{ConfigError, RouteTableError};
pub use history::{BrowserHistory, History, MemoryHistory};
pub use navigation::{NavigationError, Navigator};
pub use pages::{Page, Renderable};
pub use router::{app_routes, Pattern, Resolution, Route, RouteTable, Target};

use messages::Message;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    // Build-time config first so logging picks up the right level. The JS
    // bootstrap may still override it through `init_router_config_js`.
    let config_result = config::init_router_config();
    let config = config::current_config();
    logging::init(config.level().unwrap_or(tracing::Level::INFO));
    if let Err(e) = config_result {
        tracing::warn!("ignoring build-time router config: {}", e);
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    ui::setup::create_base_ui(&document)?;
    state::init_app_state(&config.base_path);
    install_popstate_listener(&window)?;

    // Resolve whatever URL the page was opened with
    state::dispatch_global_message(Message::LocationChanged);

    Ok(())
}

// Back / forward buttons surface as `popstate`; our own push/replace calls
// do not fire it, the navigator resolves those directly.
fn install_popstate_listener(window: &web_sys::Window) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
        state::dispatch_global_message(Message::LocationChanged);
    }) as Box<dyn FnMut(_)>);

    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Rebuild the navigation state for the active configuration and resolve
/// the current location again.
pub fn resync_location() -> Result<(), JsValue> {
    let config = config::current_config();
    state::init_app_state(&config.base_path);

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        ui::nav::refresh_hrefs(&document)?;
    }

    state::dispatch_global_message(Message::LocationChanged);
    Ok(())
}

/// Client-side navigation from JS, e.g. `navigate("/settings")`.
#[wasm_bindgen]
pub fn navigate(path: &str) {
    state::dispatch_global_message(Message::Navigate(path.to_string()));
}

/// Name of the page on screen (`"home"`, `"chat"`, `"settings"`), or
/// `undefined` before the first mount.
#[wasm_bindgen]
pub fn current_page() -> Result<JsValue, JsValue> {
    match state::current_page() {
        Some(page) => Ok(serde_wasm_bindgen::to_value(&page)?),
        None => Ok(JsValue::UNDEFINED),
    }
}
