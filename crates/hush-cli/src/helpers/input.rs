//! Input handling for master and entry passwords.

use std::io::{self, IsTerminal, Read};

use dialoguer::{Confirm, Input, Password};
use zeroize::Zeroizing;

use hush_core::crypto::{check_strength, StrengthPolicy};

use crate::constants::MASTER_PASSWORD_ENV;
use crate::errors::CliError;

fn master_from_env() -> Option<Zeroizing<String>> {
    std::env::var(MASTER_PASSWORD_ENV)
        .ok()
        .filter(|value| !value.is_empty())
        .map(Zeroizing::new)
}

fn no_tty(what: &str) -> anyhow::Error {
    CliError::invalid_input_with_hint(
        format!("No {} provided and no TTY available", what),
        format!("Set {} for non-interactive use.", MASTER_PASSWORD_ENV),
    )
    .into()
}

/// Prompt for the master password, or read it from HUSH_MASTER_PASSWORD.
pub fn prompt_master(interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = master_from_env() {
        return Ok(value);
    }
    if !interactive {
        return Err(no_tty("master password"));
    }
    Password::new()
        .with_prompt("Master password")
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read master password: {}", e))
}

/// Prompt for a new master password with confirmation (for init).
///
/// Interactive input is re-prompted until it passes `policy`; the env var is
/// returned as is and checked by the vault.
pub fn prompt_new_master(
    interactive: bool,
    policy: &StrengthPolicy,
) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = master_from_env() {
        return Ok(value);
    }
    if !interactive {
        return Err(no_tty("master password"));
    }
    loop {
        let master = Password::new()
            .with_prompt("Choose a master password")
            .with_confirmation("Confirm master password", "Passwords do not match")
            .interact()
            .map(Zeroizing::new)
            .map_err(|e| anyhow::anyhow!("Failed to read master password: {}", e))?;
        if let Err(err) = check_strength(&master, policy) {
            eprintln!("{}", err);
            continue;
        }
        return Ok(master);
    }
}

/// Read an entry password: all of stdin when it is piped, otherwise a
/// confirmed prompt repeated until the password passes `policy`.
pub fn read_entry_secret(name: &str, policy: &StrengthPolicy) -> anyhow::Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut buffer = Zeroizing::new(String::new());
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        let secret = Zeroizing::new(buffer.trim_end_matches(&['\r', '\n'][..]).to_string());
        if secret.is_empty() {
            return Err(CliError::invalid_input("No password provided on stdin").into());
        }
        return Ok(secret);
    }

    loop {
        let secret = Password::new()
            .with_prompt(format!("Password for {}", name))
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map(Zeroizing::new)
            .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
        if let Err(err) = check_strength(&secret, policy) {
            eprintln!("{}", err);
            continue;
        }
        return Ok(secret);
    }
}

/// Yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

/// Free-text prompt for an entry name.
pub fn prompt_name() -> anyhow::Result<String> {
    Input::<String>::new()
        .with_prompt("Entry name")
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read entry name: {}", e))
}
