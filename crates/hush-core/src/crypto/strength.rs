//! Password strength policy.
//!
//! Enforces minimum requirements for the master password and for every
//! stored entry.

use crate::error::{HushError, Result, StrengthIssue};

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Which character classes a password must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthPolicy {
    pub min_length: usize,
    pub require_symbol: bool,
}

impl StrengthPolicy {
    /// Length, uppercase, lowercase and digit.
    pub const fn standard() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            require_symbol: false,
        }
    }

    /// Standard plus at least one symbol.
    pub const fn strict() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            require_symbol: true,
        }
    }
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

fn weak(issue: StrengthIssue) -> Result<()> {
    Err(HushError::WeakSecret { issue })
}

fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
}

/// Validate a password against `policy`.
///
/// Classes are checked in a fixed order (length, uppercase, lowercase,
/// digit, symbol) and the first one missing is reported.
///
/// # Examples
///
/// ```
/// use hush_core::crypto::{check_strength, StrengthPolicy};
///
/// assert!(check_strength("strongPass123", &StrengthPolicy::standard()).is_ok());
/// assert!(check_strength("strongpass123", &StrengthPolicy::standard()).is_err());
/// ```
pub fn check_strength(password: &str, policy: &StrengthPolicy) -> Result<()> {
    if password.chars().count() < policy.min_length {
        return weak(StrengthIssue::TooShort {
            min: policy.min_length,
        });
    }

    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit = password.chars().any(char::is_numeric);
    let has_symbol = password.chars().any(is_symbol);

    if !has_upper {
        return weak(StrengthIssue::MissingUppercase);
    }
    if !has_lower {
        return weak(StrengthIssue::MissingLowercase);
    }
    if !has_digit {
        return weak(StrengthIssue::MissingDigit);
    }
    if policy.require_symbol && !has_symbol {
        return weak(StrengthIssue::MissingSymbol);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_for(password: &str, policy: StrengthPolicy) -> Option<StrengthIssue> {
        match check_strength(password, &policy) {
            Ok(()) => None,
            Err(HushError::WeakSecret { issue }) => Some(issue),
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_valid_password() {
        assert_eq!(issue_for("strongPass!123", StrengthPolicy::standard()), None);
        assert_eq!(issue_for("strongPass!123", StrengthPolicy::strict()), None);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            issue_for("Le$1", StrengthPolicy::standard()),
            Some(StrengthIssue::TooShort { min: 6 })
        );
    }

    #[test]
    fn test_exactly_min_length() {
        assert_eq!(issue_for("Abcde1", StrengthPolicy::standard()), None);
    }

    #[test]
    fn test_missing_uppercase() {
        assert_eq!(
            issue_for("strongpass!123", StrengthPolicy::standard()),
            Some(StrengthIssue::MissingUppercase)
        );
    }

    #[test]
    fn test_missing_lowercase() {
        assert_eq!(
            issue_for("STRONGPASS!123", StrengthPolicy::standard()),
            Some(StrengthIssue::MissingLowercase)
        );
    }

    #[test]
    fn test_missing_digit() {
        assert_eq!(
            issue_for("strongPass!", StrengthPolicy::standard()),
            Some(StrengthIssue::MissingDigit)
        );
    }

    #[test]
    fn test_symbol_only_required_when_strict() {
        assert_eq!(issue_for("strongPass123", StrengthPolicy::standard()), None);
        assert_eq!(
            issue_for("strongPass123", StrengthPolicy::strict()),
            Some(StrengthIssue::MissingSymbol)
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Five characters, more than six bytes.
        assert_eq!(
            issue_for("Ää1éé", StrengthPolicy::standard()),
            Some(StrengthIssue::TooShort { min: 6 })
        );
    }

    #[test]
    fn test_whitespace_is_not_a_symbol() {
        assert_eq!(
            issue_for("strong Pass 123", StrengthPolicy::strict()),
            Some(StrengthIssue::MissingSymbol)
        );
    }
}
