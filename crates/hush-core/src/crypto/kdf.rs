//! Key derivation using Argon2id.
//!
//! Every key in a vault (the one that unseals the master secret and the one
//! that protects entries) comes from this function and the vault's single salt.

use argon2::Argon2;
use zeroize::ZeroizeOnDrop;

use crate::error::{HushError, Result};

/// Argon2id parameters.
///
/// Fixed for the lifetime of a vault: changing any of them makes every stored
/// blob unreadable.
/// - Memory: 64 MB (64 * 1024 KB)
/// - Iterations: 1
/// - Parallelism: 4
const ARGON2_MEMORY_KB: u32 = 64 * 1024;
const ARGON2_ITERATIONS: u32 = 1;
const ARGON2_PARALLELISM: u32 = 4;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// Length of the vault salt in bytes.
pub const SALT_LENGTH: usize = 16;

/// Random per-vault salt, persisted as hex.
#[derive(Clone, PartialEq, Eq)]
pub struct Salt([u8; SALT_LENGTH]);

impl Salt {
    /// Draw a fresh salt from the OS RNG.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; SALT_LENGTH];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| HushError::Crypto(format!("Failed to generate salt: {}", e)))?;
        Ok(Self(bytes))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; SALT_LENGTH] = bytes.try_into().map_err(|_| {
            HushError::InvalidSalt(format!(
                "expected {} bytes, got {}",
                SALT_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self(array))
    }

    /// Parse the on-disk hex form. Surrounding whitespace is ignored.
    pub fn from_hex(text: &str) -> Result<Self> {
        let bytes = hex::decode(text.trim())
            .map_err(|e| HushError::InvalidSalt(format!("not valid hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; SALT_LENGTH] {
        &self.0
    }
}

impl std::fmt::Debug for Salt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Salt").field(&self.to_hex()).finish()
    }
}

/// A cryptographic key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a password using Argon2id.
///
/// # Security
///
/// - Same password + salt always produces same key (deterministic)
/// - Different salt produces different key
/// - Memory-hard: requires ~64MB RAM, resistant to GPU attacks
///
/// An empty password is accepted; rejecting it here would let a caller tell
/// an empty candidate apart from any other wrong one.
///
/// # Examples
///
/// ```
/// use hush_core::crypto::{derive_key, Salt};
///
/// let salt = Salt::from_hex("000102030405060708090a0b0c0d0e0f").unwrap();
/// let key = derive_key("my-master-password", &salt).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &Salt) -> Result<DerivedKey> {
    let params = argon2::Params::new(
        ARGON2_MEMORY_KB,
        ARGON2_ITERATIONS,
        ARGON2_PARALLELISM,
        Some(KEY_LENGTH),
    )
    .map_err(|e| HushError::Crypto(format!("Failed to create Argon2 params: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let mut key_bytes = [0u8; KEY_LENGTH];
    argon2
        .hash_password_into(password.as_bytes(), salt.as_bytes(), &mut key_bytes)
        .map_err(|e| HushError::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey::from_bytes(key_bytes))
}

/// Derive from a raw salt slice, failing with `InvalidSalt` if it is not
/// exactly `SALT_LENGTH` bytes.
pub fn derive_key_from_slice(password: &str, salt: &[u8]) -> Result<DerivedKey> {
    let salt = Salt::from_bytes(salt)?;
    derive_key(password, &salt)
}
