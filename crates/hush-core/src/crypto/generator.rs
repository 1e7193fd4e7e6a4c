//! Random password generation.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use crate::error::{HushError, Result};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"~!@#$%^&*()_-+={[}]|:;<,>.?/";

/// Shortest password `generate_password` will produce.
pub const MIN_GENERATED_LENGTH: usize = 6;

/// Longest password `generate_password` will produce.
pub const MAX_GENERATED_LENGTH: usize = 1024;

/// Generate a random password of `length` characters.
///
/// The result always contains at least one lowercase letter, uppercase
/// letter, digit and symbol, so it passes the strict strength policy.
///
/// # Examples
///
/// ```
/// use hush_core::crypto::generate_password;
///
/// let password = generate_password(16).unwrap();
/// assert_eq!(password.len(), 16);
/// ```
pub fn generate_password(length: usize) -> Result<String> {
    if !(MIN_GENERATED_LENGTH..=MAX_GENERATED_LENGTH).contains(&length) {
        return Err(HushError::InvalidInput(format!(
            "Password length must be between {} and {} (got {})",
            MIN_GENERATED_LENGTH, MAX_GENERATED_LENGTH, length
        )));
    }

    let mut rng = OsRng;
    let all: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();

    let mut chars = Vec::with_capacity(length);
    for charset in [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS] {
        chars.push(pick(charset, &mut rng)?);
    }
    while chars.len() < length {
        chars.push(pick(&all, &mut rng)?);
    }
    chars.shuffle(&mut rng);

    String::from_utf8(chars).map_err(|e| HushError::Crypto(e.to_string()))
}

fn pick(charset: &[u8], rng: &mut OsRng) -> Result<u8> {
    charset
        .choose(rng)
        .copied()
        .ok_or_else(|| HushError::Crypto("Empty character set".to_string()))
}
