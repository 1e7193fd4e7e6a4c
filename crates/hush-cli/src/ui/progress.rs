//! Spinner shown while the key derivation runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::context::UiContext;
use super::theme::spinner_frames;

/// A spinner for indeterminate progress. Draws to stderr, and only when the
/// context allows animation.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn new(ctx: &UiContext, message: &str) -> Self {
        let bar = if ctx.allows_animation() {
            let template = if ctx.color {
                "{spinner:.cyan} {msg}..."
            } else {
                "{spinner} {msg}..."
            };
            ProgressStyle::default_spinner()
                .template(template)
                .ok()
                .map(|style| {
                    let pb = ProgressBar::new_spinner();
                    pb.set_style(style.tick_strings(spinner_frames(ctx.unicode)));
                    pb.set_message(message.to_string());
                    pb.enable_steady_tick(Duration::from_millis(80));
                    pb
                })
        } else {
            None
        };

        Self { bar }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Run `op` behind a spinner.
pub fn with_spinner<T>(ctx: &UiContext, message: &str, op: impl FnOnce() -> T) -> T {
    let spinner = Spinner::new(ctx, message);
    let result = op();
    spinner.finish();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    #[test]
    fn test_spinner_inactive_without_tty() {
        let ctx = UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            quiet: false,
            mode: OutputMode::Plain,
        };
        let spinner = Spinner::new(&ctx, "Unlocking");
        assert!(spinner.bar.is_none());
    }

    #[test]
    fn test_with_spinner_returns_result() {
        let ctx = UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            quiet: true,
            mode: OutputMode::Plain,
        };
        assert_eq!(with_spinner(&ctx, "Working", || 42), 42);
    }
}
