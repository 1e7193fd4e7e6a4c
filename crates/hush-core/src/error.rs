//! Error types for Hush core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-facing messages and exit codes.
//!
//! A wrong master password and a corrupted blob both surface as
//! `IncorrectMasterPassword`. The store never reports which one happened.

use std::fmt;

use thiserror::Error;

/// Result type alias for Hush operations.
pub type Result<T> = std::result::Result<T, HushError>;

/// Core error type for Hush operations.
#[derive(Debug, Error)]
pub enum HushError {
    /// `init` was called on a vault that already holds a sealed master secret
    #[error("Hush is already initialized")]
    AlreadyInitialized,

    /// Salt or sealed master secret is missing
    #[error("Hush is not initialized")]
    NotInitialized,

    /// Wrong master password, or the data it protects is corrupted
    #[error("Incorrect master password")]
    IncorrectMasterPassword,

    /// Entry name failed sanitization
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// No entry stored under the given name
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// Secret does not meet the strength policy
    #[error("Password is too weak: {issue}")]
    WeakSecret { issue: StrengthIssue },

    /// Salt has the wrong length or encoding
    #[error("Invalid salt: {0}")]
    InvalidSalt(String),

    /// Codec-level authentication failure (tag mismatch or truncated blob)
    #[error("Authentication failed")]
    Authentication,

    /// RNG or cipher setup failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// The first character class a secret is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthIssue {
    TooShort { min: usize },
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSymbol,
}

impl fmt::Display for StrengthIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthIssue::TooShort { min } => {
                write!(f, "must be at least {} characters long", min)
            }
            StrengthIssue::MissingUppercase => {
                write!(f, "must contain at least one uppercase letter")
            }
            StrengthIssue::MissingLowercase => {
                write!(f, "must contain at least one lowercase letter")
            }
            StrengthIssue::MissingDigit => write!(f, "must contain at least one number"),
            StrengthIssue::MissingSymbol => {
                write!(f, "must contain at least one special character")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_secret_message_names_missing_class() {
        let err = HushError::WeakSecret {
            issue: StrengthIssue::MissingUppercase,
        };
        assert_eq!(
            err.to_string(),
            "Password is too weak: must contain at least one uppercase letter"
        );
    }

    #[test]
    fn test_too_short_message_includes_minimum() {
        let issue = StrengthIssue::TooShort { min: 6 };
        assert!(issue.to_string().contains("at least 6 characters"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: HushError = io.into();
        assert!(matches!(err, HushError::Io { .. }));
    }
}
