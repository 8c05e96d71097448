// frontend/src/state.rs
//
// Application state for the shell and the global dispatch entry point.
//
use std::cell::RefCell;

use crate::command_executors::execute_commands;
use crate::history::{BrowserHistory, History};
use crate::messages::{Command, Message};
use crate::navigation::Navigator;
use crate::pages::Page;
use crate::update::update;

pub struct AppState<H: History = BrowserHistory> {
    pub navigator: Navigator<H>,
    /// Page currently on screen; `None` until the first mount.
    pub current_page: Option<Page>,
}

impl<H: History> AppState<H> {
    pub fn new(history: H) -> Self {
        Self {
            navigator: Navigator::new(history),
            current_page: None,
        }
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }
}

// We use thread_local to store our app state; it is filled in by `start()`.
thread_local! {
    pub static APP_STATE: RefCell<Option<AppState>> = RefCell::new(None);
}

/// (Re)create the global state over the browser history. Any previously
/// mounted page is forgotten, so the next `LocationChanged` mounts again.
pub fn init_app_state(base_path: &str) {
    APP_STATE.with(|cell| {
        *cell.borrow_mut() = Some(AppState::new(BrowserHistory::new(base_path)));
    });
}

/// Run `msg` through the global state and execute the resulting commands.
///
/// Commands run after the mutable borrow is released so renderers and
/// event handlers may dispatch again.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|cell| match cell.borrow_mut().as_mut() {
        Some(state) => state.dispatch(msg),
        None => {
            tracing::warn!(?msg, "dropping message, app state not initialised");
            Vec::new()
        }
    });

    execute_commands(commands);
}

/// Page currently on screen, if the shell is running.
pub fn current_page() -> Option<Page> {
    APP_STATE.with(|cell| cell.borrow().as_ref().and_then(|s| s.current_page))
}
