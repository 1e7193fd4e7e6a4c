//! AES-256-GCM blob codec.
//!
//! A blob is `nonce (12) || ciphertext || tag (16)`. It carries everything
//! needed to decrypt it given the key, and is stored as base64 text.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::kdf::DerivedKey;
use crate::error::{HushError, Result};

/// Nonce length in bytes (96 bits).
pub const NONCE_LENGTH: usize = 12;

/// GCM authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

fn cipher_for(key: &DerivedKey) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()))
}

/// Encrypt `plaintext` under `key` with a fresh random nonce.
///
/// # Examples
///
/// ```
/// use hush_core::crypto::{decrypt, derive_key, encrypt, Salt};
///
/// let salt = Salt::generate().unwrap();
/// let key = derive_key("my-master-password", &salt).unwrap();
/// let blob = encrypt(b"secret data", &key).unwrap();
/// assert_eq!(decrypt(&blob, &key).unwrap(), b"secret data");
/// ```
pub fn encrypt(plaintext: &[u8], key: &DerivedKey) -> Result<Vec<u8>> {
    let mut nonce_bytes = [0u8; NONCE_LENGTH];
    getrandom::getrandom(&mut nonce_bytes)
        .map_err(|e| HushError::Crypto(format!("Failed to generate nonce: {}", e)))?;

    let ciphertext = cipher_for(key)
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|e| HushError::Crypto(format!("Encryption failed: {}", e)))?;

    let mut blob = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

/// Decrypt a blob produced by [`encrypt`].
///
/// # Errors
///
/// Returns `HushError::Authentication` if the blob is truncated, was
/// tampered with, or was sealed under a different key. These cases are not
/// told apart.
pub fn decrypt(blob: &[u8], key: &DerivedKey) -> Result<Vec<u8>> {
    if blob.len() < NONCE_LENGTH + TAG_LENGTH {
        return Err(HushError::Authentication);
    }

    let (nonce, ciphertext) = blob.split_at(NONCE_LENGTH);
    cipher_for(key)
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| HushError::Authentication)
}

/// Encode a blob for a text file.
pub fn encode_blob(blob: &[u8]) -> String {
    STANDARD.encode(blob)
}

/// Decode the text form of a blob. Undecodable text is an authentication
/// failure like any other corruption.
pub fn decode_blob(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text.trim())
        .map_err(|_| HushError::Authentication)
}
