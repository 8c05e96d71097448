// frontend/src/messages.rs
//
// Events the shell reacts to, and the side effects `update` asks for.
//
use crate::pages::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The location changed underneath us (initial load, back/forward,
    /// external history edits). Re-resolve whatever is current.
    LocationChanged,

    /// Push a new app path and resolve it.
    Navigate(String),

    /// Navigate to wherever the route table puts a page.
    NavigateTo(Page),

    /// Re-mount the current page without navigating, e.g. after a
    /// configuration change.
    Refresh,

    /// The renderer could not put this page on screen. It is forgotten so
    /// the next navigation to it mounts again.
    MountFailed(Page),
}

/// Side effects produced by `update`, executed after the state borrow ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Hand a page to the renderer.
    MountPage(Page),
}
