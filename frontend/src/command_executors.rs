use crate::messages::{Command, Message};
use crate::state::dispatch_global_message;
use crate::views::{DomRenderer, Renderer};

/// Apply one command against a renderer.
pub fn execute_command<R: Renderer>(cmd: Command, renderer: &mut R) -> Result<(), R::Error> {
    match cmd {
        Command::MountPage(page) => renderer.mount(page),
    }
}

/// Run commands in order against `renderer`. Failures are logged and do
/// not stop the remaining commands; the returned messages report them back
/// to `update`.
pub fn execute_commands_with<R: Renderer>(
    commands: Vec<Command>,
    renderer: &mut R,
) -> Vec<Message> {
    let mut follow_ups = Vec::new();

    for cmd in commands {
        if let Err(e) = execute_command(cmd.clone(), renderer) {
            tracing::error!(command = ?cmd, error = ?e, "command failed");
            follow_ups.push(failure_message(cmd));
        }
    }

    follow_ups
}

fn failure_message(cmd: Command) -> Message {
    match cmd {
        Command::MountPage(page) => Message::MountFailed(page),
    }
}

/// Execute commands against the live document and dispatch whatever
/// failures they report.
pub fn execute_commands(commands: Vec<Command>) {
    if commands.is_empty() {
        return;
    }

    let follow_ups = match DomRenderer::from_window() {
        Ok(mut renderer) => execute_commands_with(commands, &mut renderer),
        Err(e) => {
            tracing::error!(error = ?e, "cannot render without a document");
            commands.into_iter().map(failure_message).collect()
        }
    };

    for msg in follow_ups {
        dispatch_global_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Page;

    #[derive(Default)]
    struct RecordingRenderer {
        mounted: Vec<Page>,
    }

    impl Renderer for RecordingRenderer {
        type Error = String;

        fn mount(&mut self, page: Page) -> Result<(), String> {
            if page == Page::Settings {
                return Err("settings unavailable".to_string());
            }
            self.mounted.push(page);
            Ok(())
        }
    }

    #[test]
    fn mount_command_reaches_renderer() {
        let mut renderer = RecordingRenderer::default();
        execute_command(Command::MountPage(Page::Chat), &mut renderer).unwrap();
        assert_eq!(renderer.mounted, vec![Page::Chat]);
    }

    #[test]
    fn failed_mounts_are_reported_and_the_rest_still_run() {
        let mut renderer = RecordingRenderer::default();
        let follow_ups = execute_commands_with(
            vec![
                Command::MountPage(Page::Settings),
                Command::MountPage(Page::Home),
            ],
            &mut renderer,
        );
        assert_eq!(follow_ups, vec![Message::MountFailed(Page::Settings)]);
        assert_eq!(renderer.mounted, vec![Page::Home]);
    }

    #[test]
    fn renderer_errors_are_returned() {
        let mut renderer = RecordingRenderer::default();
        let err = execute_command(Command::MountPage(Page::Settings), &mut renderer).unwrap_err();
        assert_eq!(err, "settings unavailable");
        assert!(renderer.mounted.is_empty());
    }
}
