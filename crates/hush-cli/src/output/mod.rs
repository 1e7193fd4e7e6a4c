//! JSON output for `--json`.

use std::io::Write;

/// A retrieved entry.
pub fn entry_json(name: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "password": password,
    })
}

/// Entry names as a JSON array.
pub fn names_json(names: &[String]) -> serde_json::Value {
    serde_json::json!(names)
}

/// Pretty-print `value` to stdout.
pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    Ok(())
}
