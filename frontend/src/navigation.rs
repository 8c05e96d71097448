//! Navigation: route resolution plus the history side effects it implies.
//!
//! Redirects always go through [`History::replace`] or [`History::push`]
//! before the target is resolved again against the same table. Tables are
//! validated so that a redirect lands on a page, which keeps every
//! navigation to at most `MAX_REDIRECTS + 1` resolution steps.

use std::fmt::Debug;

use thiserror::Error;

use crate::history::History;
use crate::pages::Page;
use crate::router::{app_routes, Resolution, RouteTable};

/// Redirect hops allowed per navigation.
pub const MAX_REDIRECTS: usize = 1;

#[derive(Error, Debug)]
pub enum NavigationError<E: Debug> {
    #[error("history update failed: {0:?}")]
    History(E),

    #[error("redirect from '{0}' did not settle on a page")]
    RedirectLoop(String),

    #[error("no route renders the {0} page")]
    Unrouted(Page),
}

pub struct Navigator<H: History> {
    history: H,
    table: &'static RouteTable,
    redirects: usize,
}

impl<H: History> Navigator<H> {
    /// Navigator over the application route table.
    pub fn new(history: H) -> Self {
        Self::with_table(history, app_routes())
    }

    pub fn with_table(history: H, table: &'static RouteTable) -> Self {
        Self {
            history,
            table,
            redirects: 0,
        }
    }

    /// Resolve the current location, applying redirects to history, and
    /// return the page that should be on screen.
    pub fn sync(&mut self) -> Result<Page, NavigationError<H::Error>> {
        let start = self.history.current_path();
        let mut location = start.clone();

        for _ in 0..=MAX_REDIRECTS {
            let resolution = match location.as_deref() {
                Some(path) => self.table.resolve(path),
                None => self.table.fallback(),
            };

            match resolution {
                Resolution::Render(page) => {
                    crate::debug_log!(location = ?location, page = %page, "resolved");
                    return Ok(page);
                }
                Resolution::Redirect { to, replace } => {
                    tracing::info!(from = ?location, to, replace, "redirecting");
                    let written = if replace {
                        self.history.replace(to)
                    } else {
                        self.history.push(to)
                    };
                    written.map_err(NavigationError::History)?;
                    self.redirects += 1;
                    location = Some(to.to_string());
                }
            }
        }

        let start = start.unwrap_or_default();
        tracing::error!(from = %start, "redirect did not settle");
        Err(NavigationError::RedirectLoop(start))
    }

    /// Push `path` (unless it is already current) and resolve it.
    ///
    /// The path is resolved before history is touched. One that does not
    /// render a page is never written; its redirect target is pushed
    /// instead, so the browser never gets to interpret a relative or
    /// dot-segment URL.
    pub fn navigate(&mut self, path: &str) -> Result<Page, NavigationError<H::Error>> {
        let entry = match self.table.resolve(path) {
            Resolution::Render(_) => path,
            Resolution::Redirect { to, .. } => {
                tracing::info!(from = path, to, "redirecting before push");
                self.redirects += 1;
                to
            }
        };

        if self.history.current_path().as_deref() != Some(entry) {
            self.history.push(entry).map_err(NavigationError::History)?;
        }
        self.sync()
    }

    /// Navigate to the first path that renders `page`.
    pub fn navigate_to(&mut self, page: Page) -> Result<Page, NavigationError<H::Error>> {
        let path = self
            .table
            .path_for(page)
            .ok_or(NavigationError::Unrouted(page))?;
        self.navigate(path)
    }

    /// Number of redirects applied since creation.
    pub fn redirect_count(&self) -> usize {
        self.redirects
    }

    pub fn table(&self) -> &'static RouteTable {
        self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}
