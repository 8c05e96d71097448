//! End-to-end routing scenarios against an in-memory history.
//!
//! Drives the same `update` → `Command` → `Renderer` path the browser build
//! uses, with a renderer that records what it was asked to mount.
//!
//! Run with: cargo test --test routing_scenarios

use chat_shell_frontend::command_executors::execute_commands_with;
use chat_shell_frontend::messages::Message;
use chat_shell_frontend::state::AppState;
use chat_shell_frontend::update::update;
use chat_shell_frontend::views::Renderer;
use chat_shell_frontend::{History, MemoryHistory, Page};

#[derive(Default)]
struct RecordingRenderer {
    mounted: Vec<Page>,
    /// Mounts of this page fail while set.
    broken: Option<Page>,
}

impl Renderer for RecordingRenderer {
    type Error = String;

    fn mount(&mut self, page: Page) -> Result<(), Self::Error> {
        if self.broken == Some(page) {
            return Err(format!("{} failed to mount", page));
        }
        self.mounted.push(page);
        Ok(())
    }
}

struct Shell {
    state: AppState<MemoryHistory>,
    renderer: RecordingRenderer,
}

impl Shell {
    fn open(path: &str) -> Self {
        let mut shell = Self {
            state: AppState::new(MemoryHistory::new(path)),
            renderer: RecordingRenderer::default(),
        };
        shell.send(Message::LocationChanged);
        shell
    }

    fn send(&mut self, msg: Message) {
        let commands = update(&mut self.state, msg);
        for follow_up in execute_commands_with(commands, &mut self.renderer) {
            self.send(follow_up);
        }
    }

    fn location(&self) -> String {
        self.state.navigator.history().current_path().unwrap()
    }
}

#[test]
fn home_chat_and_settings_render_directly() {
    for (path, page) in [("/", Page::Home), ("/chat", Page::Chat), ("/settings", Page::Settings)] {
        let shell = Shell::open(path);
        assert_eq!(shell.renderer.mounted, vec![page], "opening {}", path);
        assert_eq!(shell.location(), path);
    }
}

#[test]
fn unknown_path_redirects_then_renders_home() {
    let shell = Shell::open("/unknown");
    assert_eq!(shell.renderer.mounted, vec![Page::Home]);
    assert_eq!(shell.location(), "/");
    assert_eq!(shell.state.navigator.history().len(), 1);
    assert_eq!(shell.state.navigator.redirect_count(), 1);
}

#[test]
fn trailing_slash_redirects_then_renders_home() {
    let shell = Shell::open("/chat/");
    assert_eq!(shell.renderer.mounted, vec![Page::Home]);
    assert_eq!(shell.location(), "/");
}

#[test]
fn browsing_session_with_back_button() {
    let mut shell = Shell::open("/");
    shell.send(Message::NavigateTo(Page::Chat));
    shell.send(Message::Navigate("/settings".into()));
    shell.send(Message::Navigate("/typo".into()));

    assert_eq!(
        shell.renderer.mounted,
        vec![Page::Home, Page::Chat, Page::Settings, Page::Home]
    );
    assert_eq!(
        shell.state.navigator.history().entries(),
        ["/", "/chat", "/settings", "/"].map(String::from)
    );

    // Back lands on a real page, never on "/typo"
    assert!(shell.state.navigator.history_mut().back());
    shell.send(Message::LocationChanged);
    assert_eq!(shell.location(), "/settings");
    assert_eq!(shell.renderer.mounted.last(), Some(&Page::Settings));
}

#[test]
fn page_that_failed_to_mount_is_retried() {
    let mut shell = Shell {
        state: AppState::new(MemoryHistory::new("/chat")),
        renderer: RecordingRenderer {
            broken: Some(Page::Chat),
            ..Default::default()
        },
    };
    shell.send(Message::LocationChanged);
    assert!(shell.renderer.mounted.is_empty());
    assert_eq!(shell.state.current_page, None);

    shell.renderer.broken = None;
    shell.send(Message::Navigate("/chat".into()));
    assert_eq!(shell.renderer.mounted, vec![Page::Chat]);
    assert_eq!(shell.state.current_page, Some(Page::Chat));
    assert_eq!(shell.state.navigator.history().len(), 1);
}

#[test]
fn relative_link_from_settings_lands_home() {
    let mut shell = Shell::open("/settings");
    shell.send(Message::Navigate("chat".into()));
    assert_eq!(shell.renderer.mounted, vec![Page::Settings, Page::Home]);
    assert_eq!(shell.location(), "/");
    assert!(shell
        .state
        .navigator
        .history()
        .entries()
        .iter()
        .all(|e| e == "/settings" || e == "/"));
}
