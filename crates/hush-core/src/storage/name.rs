//! Entry name sanitization.
//!
//! The only defense against path traversal: every name goes through
//! [`EntryName::parse`] before it is joined onto the vault directory.

use std::fmt;

use crate::error::{HushError, Result};

/// Maximum entry name length in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// A validated entry name: `[A-Za-z0-9.-]+`, no leading or trailing dot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryName(String);

impl EntryName {
    /// Trim and validate `raw`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hush_core::EntryName;
    ///
    /// assert_eq!(EntryName::parse(" github ").unwrap().as_str(), "github");
    /// assert!(EntryName::parse("../etc/passwd").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(HushError::InvalidName("name cannot be empty".to_string()));
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(HushError::InvalidName(format!(
                "name is too long (max {} characters)",
                MAX_NAME_LENGTH
            )));
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return Err(HushError::InvalidName(
                "name contains invalid characters (only letters, digits, hyphen and dot are allowed)"
                    .to_string(),
            ));
        }

        if name.starts_with('.') || name.ends_with('.') {
            return Err(HushError::InvalidName(
                "name cannot start or end with a dot".to_string(),
            ));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
