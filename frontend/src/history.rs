//! Location sources.
//!
//! [`History`] is the seam between navigation logic and the browser: the
//! navigator reads the current app path from it and writes pushes and
//! replacements back. [`BrowserHistory`] talks to `window.history`;
//! [`MemoryHistory`] keeps an in-process stack for tests and headless hosts.

use std::convert::Infallible;
use std::fmt::Debug;

use wasm_bindgen::JsValue;

use crate::router::path::{strip_base, with_base};

pub trait History {
    type Error: Debug;

    /// App path of the current entry, query and fragment included, with any
    /// deployment prefix removed.
    /// `None` when the location lies outside the app.
    fn current_path(&self) -> Option<String>;

    /// Add a new entry after the current one.
    fn push(&mut self, path: &str) -> Result<(), Self::Error>;

    /// Overwrite the current entry.
    fn replace(&mut self, path: &str) -> Result<(), Self::Error>;
}

/// In-memory history stack with browser-like semantics: pushing drops any
/// forward entries, replacing leaves the length unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            index: 0,
        }
    }

    /// Step back one entry. Returns false at the start of the stack.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns false at the end of the stack.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    type Error = Infallible;

    fn current_path(&self) -> Option<String> {
        Some(self.entries[self.index].clone())
    }

    fn push(&mut self, path: &str) -> Result<(), Self::Error> {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index += 1;
        Ok(())
    }

    fn replace(&mut self, path: &str) -> Result<(), Self::Error> {
        self.entries[self.index] = path.to_string();
        Ok(())
    }
}

/// `window.location` / `window.history` backed source.
#[derive(Debug, Clone, Default)]
pub struct BrowserHistory {
    base_path: String,
}

impl BrowserHistory {
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: base_path.to_string(),
        }
    }

    fn window() -> Result<web_sys::Window, JsValue> {
        web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
    }
}

impl History for BrowserHistory {
    type Error = JsValue;

    fn current_path(&self) -> Option<String> {
        let location = Self::window().ok()?.location();
        let pathname = location.pathname().ok()?;
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let path = strip_base(&pathname, &self.base_path)?;
        Some(format!("{}{}{}", path, search, hash))
    }

    fn push(&mut self, path: &str) -> Result<(), Self::Error> {
        let url = with_base(path, &self.base_path);
        Self::window()?
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&url))
    }

    fn replace(&mut self, path: &str) -> Result<(), Self::Error> {
        let url = with_base(path, &self.base_path);
        Self::window()?
            .history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
    }
}
