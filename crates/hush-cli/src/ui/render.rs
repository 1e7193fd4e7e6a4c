//! Rendering primitives for CLI output.

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Hush · command (context)"
/// Plain mode: "hush command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    if ctx.mode.is_json() {
        return String::new();
    }
    if !ctx.mode.is_pretty() {
        return format!("hush {}", command);
    }
    let title = styled("Hush", styles::bold(), ctx.color);
    match context {
        Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
        None => format!("{} \u{00B7} {}", title, command),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Print a status block to stdout unless quiet or JSON.
pub fn print_status(ctx: &UiContext, message: &str) {
    if ctx.shows_status() {
        println!("{}", message);
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            quiet: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            quiet: false,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_modes() {
        assert_eq!(header(&plain_ctx(), "list", None), "hush list");
        assert_eq!(
            header(&pretty_ctx(), "list", Some("3 entries")),
            "Hush \u{00B7} list (3 entries)"
        );
    }

    #[test]
    fn test_kv_plain_is_machine_friendly() {
        assert_eq!(kv(&plain_ctx(), "Vault Path", "/tmp/v"), "vault_path=/tmp/v");
        assert_eq!(kv(&pretty_ctx(), "Vault", "/tmp/v"), "Vault: /tmp/v");
    }

    #[test]
    fn test_receipt_plain() {
        let out = receipt(&plain_ctx(), "Stored", &[("Name", "bank")]);
        assert_eq!(out, "status=ok\nname=bank");
    }

    #[test]
    fn test_receipt_pretty() {
        let out = receipt(&pretty_ctx(), "Stored", &[("Name", "bank")]);
        assert_eq!(out, "[\u{2713}] Stored\n  Name: bank");
    }

    #[test]
    fn test_error_message_plain() {
        let out = error_message(&plain_ctx(), "Entry not found: bank", Some("run list"));
        assert_eq!(out, "error=Entry not found: bank\nhint=run list");
    }

    #[test]
    fn test_error_message_pretty() {
        let out = error_message(&pretty_ctx(), "Incorrect master password", None);
        assert_eq!(out, "[\u{2717}] Incorrect master password");
    }
}
