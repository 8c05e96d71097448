// frontend/src/update.rs
//
// Reducer for the shell. Navigation happens through the navigator (which
// owns the history); everything DOM-related is returned as a `Command`.
//
use crate::history::History;
use crate::messages::{Command, Message};
use crate::pages::Page;
use crate::state::AppState;

pub fn update<H: History>(state: &mut AppState<H>, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    let resolved = match msg {
        Message::LocationChanged => state.navigator.sync(),
        Message::Navigate(path) => state.navigator.navigate(&path),
        Message::NavigateTo(page) => state.navigator.navigate_to(page),
        Message::Refresh => {
            if let Some(page) = state.current_page {
                commands.push(Command::MountPage(page));
            }
            return commands;
        }
        Message::MountFailed(page) => {
            if state.current_page == Some(page) {
                state.current_page = None;
            }
            return commands;
        }
    };

    match resolved {
        Ok(page) => show_page(state, page, &mut commands),
        Err(e) => tracing::error!("navigation failed: {}", e),
    }

    commands
}

fn show_page<H: History>(state: &mut AppState<H>, page: Page, commands: &mut Vec<Command>) {
    if state.current_page == Some(page) {
        crate::debug_log!(%page, "already mounted");
        return;
    }
    state.current_page = Some(page);
    commands.push(Command::MountPage(page));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;

    fn state_at(path: &str) -> AppState<MemoryHistory> {
        AppState::new(MemoryHistory::new(path))
    }

    #[test]
    fn initial_location_mounts_its_page() {
        let mut state = state_at("/settings");
        let commands = update(&mut state, Message::LocationChanged);
        assert_eq!(commands, vec![Command::MountPage(Page::Settings)]);
        assert_eq!(state.current_page, Some(Page::Settings));
    }

    #[test]
    fn unknown_location_mounts_home_after_replace() {
        let mut state = state_at("/unknown");
        let commands = update(&mut state, Message::LocationChanged);
        assert_eq!(commands, vec![Command::MountPage(Page::Home)]);
        assert_eq!(state.navigator.history().entries(), ["/".to_string()]);
    }

    #[test]
    fn navigating_to_the_mounted_page_is_a_no_op() {
        let mut state = state_at("/chat");
        update(&mut state, Message::LocationChanged);
        assert!(update(&mut state, Message::Navigate("/chat".into())).is_empty());
        assert!(update(&mut state, Message::NavigateTo(Page::Chat)).is_empty());
        assert_eq!(state.navigator.history().len(), 1);
    }

    #[test]
    fn query_change_keeps_page_but_records_entry() {
        let mut state = state_at("/chat");
        update(&mut state, Message::LocationChanged);
        assert!(update(&mut state, Message::Navigate("/chat?thread=7".into())).is_empty());
        assert_eq!(state.navigator.history().len(), 2);
    }

    #[test]
    fn refresh_remounts_current_page_only_once_mounted() {
        let mut state = state_at("/");
        assert!(update(&mut state, Message::Refresh).is_empty());

        update(&mut state, Message::LocationChanged);
        assert_eq!(
            update(&mut state, Message::Refresh),
            vec![Command::MountPage(Page::Home)]
        );
    }

    #[test]
    fn failed_mount_is_retried_on_next_navigation() {
        let mut state = state_at("/chat");
        update(&mut state, Message::LocationChanged);
        update(&mut state, Message::MountFailed(Page::Chat));
        assert_eq!(state.current_page, None);

        assert_eq!(
            update(&mut state, Message::Navigate("/chat".into())),
            vec![Command::MountPage(Page::Chat)]
        );
        assert_eq!(state.current_page, Some(Page::Chat));
    }

    #[test]
    fn stale_mount_failure_keeps_newer_page() {
        let mut state = state_at("/");
        update(&mut state, Message::LocationChanged);
        update(&mut state, Message::NavigateTo(Page::Settings));
        update(&mut state, Message::MountFailed(Page::Home));
        assert_eq!(state.current_page, Some(Page::Settings));
    }

    #[test]
    fn back_navigation_is_picked_up_on_location_change() {
        let mut state = state_at("/");
        update(&mut state, Message::LocationChanged);
        update(&mut state, Message::NavigateTo(Page::Settings));
        assert_eq!(state.current_page, Some(Page::Settings));

        assert!(state.navigator.history_mut().back());
        let commands = update(&mut state, Message::LocationChanged);
        assert_eq!(commands, vec![Command::MountPage(Page::Home)]);
    }
}
