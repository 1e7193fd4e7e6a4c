//! Master secret envelope.
//!
//! At init the master password is encrypted under a key derived from itself
//! and the vault salt. Unsealing with a candidate password succeeds only if
//! the candidate derives the same key, and yields the original plaintext,
//! which is then the root secret for every entry key.

use secrecy::SecretString;
use zeroize::Zeroizing;

use crate::crypto::{decode_blob, decrypt, derive_key, encode_blob, encrypt, Salt};
use crate::error::{HushError, Result};

/// Output of [`seal`]: both halves must be persisted.
#[derive(Debug, Clone)]
pub struct SealedMaster {
    pub salt: Salt,
    pub blob: Vec<u8>,
}

impl SealedMaster {
    /// Base64 text form written to `master.hash`.
    pub fn blob_text(&self) -> String {
        encode_blob(&self.blob)
    }
}

/// Seal `master` under a key derived from itself and a freshly generated salt.
pub fn seal(master: &str) -> Result<SealedMaster> {
    let salt = Salt::generate()?;
    let key = derive_key(master, &salt)?;
    let blob = encrypt(master.as_bytes(), &key)?;
    tracing::debug!("sealed master secret");
    Ok(SealedMaster { salt, blob })
}

/// Recover the master password plaintext with `candidate`.
///
/// # Errors
///
/// Any failure past key derivation (undecodable blob, authentication
/// failure, non-UTF-8 plaintext) is `IncorrectMasterPassword`.
pub fn unseal(candidate: &str, salt: &Salt, blob_text: &str) -> Result<SecretString> {
    let key = derive_key(candidate, salt)?;

    let plaintext = decode_blob(blob_text)
        .and_then(|blob| decrypt(&blob, &key))
        .map(Zeroizing::new)
        .map_err(|_| HushError::IncorrectMasterPassword)?;

    let master = std::str::from_utf8(&plaintext)
        .map_err(|_| HushError::IncorrectMasterPassword)?
        .to_string();
    tracing::debug!("unsealed master secret");
    Ok(SecretString::from(master))
}
