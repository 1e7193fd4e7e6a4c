//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Suppress status lines
    pub quiet: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(json_flag: bool, no_color_flag: bool, quiet: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        // Disabled by NO_COLOR, --no-color or TERM=dumb
        let color = is_tty && !no_color_flag && !no_color_env && !term_is_dumb;
        let unicode = !term_is_dumb;
        let mode = OutputMode::resolve(json_flag, is_tty, term_is_dumb);

        Self {
            is_tty,
            color,
            unicode,
            quiet,
            mode,
        }
    }

    /// Check if interactive prompts are allowed.
    pub fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
    }

    /// Check if spinners are allowed.
    pub fn allows_animation(&self) -> bool {
        self.is_tty && !self.quiet && self.mode == OutputMode::Pretty
    }

    /// Whether status lines (badges, receipts) should be printed.
    pub fn shows_status(&self) -> bool {
        !self.quiet && !self.mode.is_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
        assert!(!ctx.shows_status());
    }

    #[test]
    fn test_no_color_disables_color() {
        let ctx = UiContext::from_env(false, true, false);
        assert!(!ctx.color);
    }

    #[test]
    fn test_quiet_hides_status_and_animation() {
        let ctx = UiContext::from_env(false, false, true);
        assert!(!ctx.shows_status());
        assert!(!ctx.allows_animation());
    }
}
