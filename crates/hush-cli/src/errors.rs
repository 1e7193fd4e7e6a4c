//! CLI error types for structured error handling.
//!
//! Handlers return `anyhow::Result`. At the top level, [`Report::from_error`]
//! finds the typed error in the chain and picks the message, hint and exit
//! code shown to the user.

use std::fmt;

use hush_core::HushError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Invalid user input (missing TTY, refused confirmation)
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
        }
    }
}

/// Exit code for a core error.
pub fn core_exit_code(err: &HushError) -> i32 {
    match err {
        HushError::EntryNotFound(_) | HushError::NotInitialized => exit_codes::NOT_FOUND,
        HushError::InvalidName(_)
        | HushError::WeakSecret { .. }
        | HushError::AlreadyInitialized
        | HushError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        HushError::IncorrectMasterPassword => exit_codes::AUTH_FAILED,
        _ => exit_codes::GENERAL,
    }
}

/// Contextual hint for a core error.
pub fn core_hint(err: &HushError) -> Option<&'static str> {
    match err {
        HushError::NotInitialized => Some("Run `hush init` to create a vault."),
        HushError::AlreadyInitialized => {
            Some("A vault already exists here. Run `hush implode` first to start over.")
        }
        HushError::EntryNotFound(_) => Some("Run `hush list` to see stored entries."),
        HushError::IncorrectMasterPassword => Some(
            "Check your master password. Set HUSH_MASTER_PASSWORD for non-interactive use.",
        ),
        HushError::InvalidName(_) => Some("Names may contain letters, digits, hyphens and dots."),
        HushError::WeakSecret { .. } => Some("Run `hush generate` for a strong password."),
        HushError::InvalidSalt(_) => {
            Some("The vault salt file is damaged; the vault cannot be opened.")
        }
        _ => None,
    }
}

/// What `main` shows the user for a failed command.
#[derive(Debug)]
pub struct Report {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl Report {
    pub fn from_error(err: &anyhow::Error) -> Self {
        let message = err.to_string();

        for cause in err.chain() {
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return Self {
                    message,
                    hint: cli_err.hint().map(str::to_string),
                    exit_code: cli_err.exit_code(),
                };
            }
            if let Some(core_err) = cause.downcast_ref::<HushError>() {
                return Self {
                    message,
                    hint: core_hint(core_err).map(str::to_string),
                    exit_code: core_exit_code(core_err),
                };
            }
        }

        Self {
            message,
            hint: None,
            exit_code: exit_codes::GENERAL,
        }
    }
}
