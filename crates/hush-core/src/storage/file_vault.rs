//! Directory-backed vault.
//!
//! ```text
//! <root>/
//!   salt           hex, written once at init
//!   master.hash    base64 sealed master secret, written once at init
//!   <name>.hush    base64 entry blob, one per entry
//! ```
//!
//! Entry keys are derived from the *recovered* master plaintext, not from the
//! candidate the caller typed: unseal first, then derive again.

use std::fs;
use std::io;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::crypto::{
    check_strength, decode_blob, decrypt, derive_key, encode_blob, encrypt, DerivedKey, Salt,
    StrengthPolicy,
};
use crate::envelope::{seal, unseal};
use crate::error::{HushError, Result};
use crate::fs::{create_private_dir, write_atomic};

use super::layout::VaultLayout;
use super::name::EntryName;
use super::traits::EntryStore;

/// Vault stored as one file per entry under a root directory.
#[derive(Debug, Clone)]
pub struct FileVault {
    layout: VaultLayout,
    policy: StrengthPolicy,
}

/// Salt and sealed master blob as read from disk.
struct Envelope {
    salt: Salt,
    blob_text: String,
}

impl FileVault {
    /// Vault rooted at `root`. Nothing is touched on disk until an operation runs.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            layout: VaultLayout::new(root.as_ref()),
            policy: StrengthPolicy::default(),
        }
    }

    /// Use `policy` for the master password at init and for every `put`.
    pub fn with_policy(mut self, policy: StrengthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    pub fn policy(&self) -> &StrengthPolicy {
        &self.policy
    }

    fn load_envelope(&self) -> Result<Envelope> {
        let salt_text = read_optional(&self.layout.salt_path())?;
        let blob_text = read_optional(&self.layout.master_path())?;
        match (salt_text, blob_text) {
            (Some(salt_text), Some(blob_text)) => Ok(Envelope {
                salt: Salt::from_hex(&salt_text)?,
                blob_text,
            }),
            _ => Err(HushError::NotInitialized),
        }
    }

    /// Validate `master` and derive the entry key from the recovered plaintext.
    fn entry_key(&self, envelope: &Envelope, master: &str) -> Result<DerivedKey> {
        let recovered = unseal(master, &envelope.salt, &envelope.blob_text)?;
        derive_key(recovered.expose_secret(), &envelope.salt)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

impl EntryStore for FileVault {
    fn init(&self, master: &str) -> Result<()> {
        if self.layout.master_path().exists() {
            return Err(HushError::AlreadyInitialized);
        }
        check_strength(master, &self.policy)?;

        create_private_dir(self.root())?;
        let sealed = seal(master)?;
        // master.hash marks a finished init, so it goes last.
        write_atomic(&self.layout.salt_path(), sealed.salt.to_hex().as_bytes())?;
        write_atomic(&self.layout.master_path(), sealed.blob_text().as_bytes())?;

        tracing::debug!(root = %self.root().display(), "initialized vault");
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.layout.salt_path().is_file() && self.layout.master_path().is_file()
    }

    fn put(&self, name: &str, value: &str, master: &str) -> Result<()> {
        let name = EntryName::parse(name)?;
        check_strength(value, &self.policy)?;

        let envelope = self.load_envelope()?;
        let key = self.entry_key(&envelope, master)?;

        let blob = encrypt(value.as_bytes(), &key)?;
        write_atomic(&self.layout.entry_path(&name), encode_blob(&blob).as_bytes())?;

        tracing::debug!(entry = %name, "stored entry");
        Ok(())
    }

    fn get(&self, name: &str, master: &str) -> Result<SecretString> {
        let name = EntryName::parse(name)?;
        let envelope = self.load_envelope()?;

        let path = self.layout.entry_path(&name);
        if !path.is_file() {
            return Err(HushError::EntryNotFound(name.to_string()));
        }
        let blob_text = fs::read_to_string(&path)?;

        let key = self.entry_key(&envelope, master)?;
        let plaintext = decode_blob(&blob_text)
            .and_then(|blob| decrypt(&blob, &key))
            .map(Zeroizing::new)
            .map_err(|_| HushError::IncorrectMasterPassword)?;
        let value = std::str::from_utf8(&plaintext)
            .map_err(|_| HushError::IncorrectMasterPassword)?
            .to_string();

        tracing::debug!(entry = %name, "read entry");
        Ok(SecretString::from(value))
    }

    fn remove(&self, name: &str, master: &str) -> Result<()> {
        let name = EntryName::parse(name)?;
        let envelope = self.load_envelope()?;

        let path = self.layout.entry_path(&name);
        if !path.is_file() {
            return Err(HushError::EntryNotFound(name.to_string()));
        }

        unseal(master, &envelope.salt, &envelope.blob_text)?;
        fs::remove_file(&path)?;

        tracing::debug!(entry = %name, "removed entry");
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.is_initialized() {
            return Err(HushError::NotInitialized);
        }

        let mut names = Vec::new();
        for dir_entry in fs::read_dir(self.root())? {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_file() {
                continue;
            }
            let file_name = dir_entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(name) = VaultLayout::entry_name_from_file(file_name) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn implode(&self, master: &str) -> Result<()> {
        let envelope = self.load_envelope()?;
        unseal(master, &envelope.salt, &envelope.blob_text)?;

        fs::remove_dir_all(self.root())?;

        tracing::debug!(root = %self.root().display(), "imploded vault");
        Ok(())
    }
}
