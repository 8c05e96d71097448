//! Table-driven routing for the top-level pages.
//!
//! A [`RouteTable`] is an ordered list of `(pattern, target)` pairs plus one
//! wildcard entry. [`RouteTable::resolve`] is total: every string maps to
//! either a page or a redirect, so "no route" is not an error state.

pub mod path;

use lazy_static::lazy_static;

use crate::constants::{CHAT_PATH, FALLBACK_PATH, HOME_PATH, SETTINGS_PATH, WILDCARD_PATTERN};
use crate::error::RouteTableError;
use crate::pages::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches one exact path.
    Literal(String),
    /// Catch-all, applied only when no literal matches.
    Wildcard,
}

impl Pattern {
    /// `"*"` is the wildcard, anything else a literal.
    pub fn parse(raw: &str) -> Self {
        if raw == WILDCARD_PATTERN {
            Pattern::Wildcard
        } else {
            Pattern::Literal(raw.to_string())
        }
    }

    fn literal(&self) -> Option<&str> {
        match self {
            Pattern::Literal(p) => Some(p),
            Pattern::Wildcard => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Page(Page),
    /// Navigate elsewhere; `replace` overwrites the current history entry
    /// instead of pushing a new one.
    Redirect { to: String, replace: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: Pattern,
    pub target: Target,
}

impl Route {
    pub fn page(pattern: &str, page: Page) -> Self {
        Self {
            pattern: Pattern::parse(pattern),
            target: Target::Page(page),
        }
    }

    pub fn redirect(pattern: &str, to: &str, replace: bool) -> Self {
        Self {
            pattern: Pattern::parse(pattern),
            target: Target::Redirect {
                to: to.to_string(),
                replace,
            },
        }
    }
}

/// Outcome of resolving one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Render(Page),
    Redirect { to: &'a str, replace: bool },
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    wildcard: usize,
}

impl RouteTable {
    /// Validate and freeze a route list.
    ///
    /// Requires exactly one wildcard, unique absolute literals, and redirect
    /// targets that land on a literal page entry. The last rule bounds every
    /// navigation to at most two resolution steps.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        let wildcards: Vec<usize> = routes
            .iter()
            .enumerate()
            .filter(|(_, r)| r.pattern == Pattern::Wildcard)
            .map(|(i, _)| i)
            .collect();

        let wildcard = match wildcards.as_slice() {
            [] => return Err(RouteTableError::MissingWildcard),
            [only] => *only,
            many => return Err(RouteTableError::MultipleWildcards(many.len())),
        };

        let mut seen: Vec<&str> = Vec::with_capacity(routes.len());
        for literal in routes.iter().filter_map(|r| r.pattern.literal()) {
            if !path::is_absolute(literal) {
                return Err(RouteTableError::InvalidPath(literal.to_string()));
            }
            if seen.contains(&literal) {
                return Err(RouteTableError::DuplicatePath(literal.to_string()));
            }
            seen.push(literal);
        }

        let table = Self { routes, wildcard };

        for route in &table.routes {
            if let Target::Redirect { to, .. } = &route.target {
                if !path::is_absolute(to) {
                    return Err(RouteTableError::InvalidPath(to.clone()));
                }
                if table.literal_page(to).is_none() {
                    return Err(RouteTableError::UnresolvedRedirect(to.clone()));
                }
            }
        }

        Ok(table)
    }

    /// Resolve a location. Query string and fragment are ignored; the rest
    /// must match a literal exactly, otherwise the wildcard applies.
    pub fn resolve(&self, location: &str) -> Resolution<'_> {
        let wanted = path::path_only(location);

        let route = self
            .routes
            .iter()
            .find(|r| r.pattern.literal() == Some(wanted))
            .unwrap_or(&self.routes[self.wildcard]);

        Self::resolution(route)
    }

    /// What the wildcard entry does. Used for locations that are not app
    /// paths at all, e.g. outside the deployment prefix.
    pub fn fallback(&self) -> Resolution<'_> {
        Self::resolution(&self.routes[self.wildcard])
    }

    fn resolution(route: &Route) -> Resolution<'_> {
        match &route.target {
            Target::Page(page) => Resolution::Render(*page),
            Target::Redirect { to, replace } => Resolution::Redirect {
                to: to.as_str(),
                replace: *replace,
            },
        }
    }

    /// First literal path that renders `page`, if any.
    pub fn path_for(&self, page: Page) -> Option<&str> {
        self.routes.iter().find_map(|r| match (&r.pattern, &r.target) {
            (Pattern::Literal(p), Target::Page(target)) if *target == page => Some(p.as_str()),
            _ => None,
        })
    }

    /// Entries in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    fn literal_page(&self, path: &str) -> Option<Page> {
        self.routes.iter().find_map(|r| match (&r.pattern, &r.target) {
            (Pattern::Literal(p), Target::Page(page)) if p == path => Some(*page),
            _ => None,
        })
    }
}

/// The shell's routes, in declaration order.
pub fn app_route_list() -> Vec<Route> {
    vec![
        Route::page(HOME_PATH, Page::Home),
        Route::page(CHAT_PATH, Page::Chat),
        Route::page(SETTINGS_PATH, Page::Settings),
        Route::redirect(WILDCARD_PATTERN, FALLBACK_PATH, true),
    ]
}

lazy_static! {
    // Built from constants; the unit tests below cover its validity.
    static ref APP_ROUTES: RouteTable =
        RouteTable::new(app_route_list()).expect("application route table is valid");
}

/// Process-wide, read-only application route table.
pub fn app_routes() -> &'static RouteTable {
    &APP_ROUTES
}
