//! Hand a revealed password to the user.

use arboard::Clipboard;

use crate::ui::{badge, print_status, Badge, UiContext};

const COPIED_MESSAGE: &str = "Password copied to clipboard.";

/// Where a revealed password should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Clipboard,
    Stdout,
}

impl Reveal {
    /// `--display` and non-TTY stdout always print; otherwise copy.
    pub fn choose(ui: &UiContext, display: bool) -> Self {
        if display || !ui.is_tty || ui.mode.is_json() {
            Reveal::Stdout
        } else {
            Reveal::Clipboard
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)
}

/// Copy `secret` to the clipboard, or print it on stdout when the clipboard
/// is not wanted or not reachable.
pub fn reveal_secret(ui: &UiContext, display: bool, secret: &str) {
    if Reveal::choose(ui, display) == Reveal::Clipboard {
        match copy_to_clipboard(secret) {
            Ok(()) => {
                print_status(ui, &badge(ui, Badge::Ok, COPIED_MESSAGE));
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable, printing instead");
            }
        }
    }
    println!("{}", secret);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn ui(is_tty: bool, mode: OutputMode) -> UiContext {
        UiContext {
            is_tty,
            color: false,
            unicode: false,
            quiet: false,
            mode,
        }
    }

    #[test]
    fn test_terminal_defaults_to_clipboard() {
        assert_eq!(
            Reveal::choose(&ui(true, OutputMode::Pretty), false),
            Reveal::Clipboard
        );
    }

    #[test]
    fn test_display_flag_prints() {
        assert_eq!(
            Reveal::choose(&ui(true, OutputMode::Pretty), true),
            Reveal::Stdout
        );
    }

    #[test]
    fn test_piped_stdout_prints() {
        assert_eq!(
            Reveal::choose(&ui(false, OutputMode::Plain), false),
            Reveal::Stdout
        );
    }

    #[test]
    fn test_json_prints() {
        assert_eq!(
            Reveal::choose(&ui(true, OutputMode::Json), false),
            Reveal::Stdout
        );
    }
}
