//! Entry store trait definition.
//!
//! The `EntryStore` trait is the interface the CLI drives. Every operation
//! that touches a secret takes the master password candidate; nothing is
//! cached between calls.

use secrecy::SecretString;

use crate::error::Result;

/// Encrypted credential store gated by a master password.
///
/// All implementations must ensure:
/// - Entry values and the master secret are encrypted at rest
/// - Entry names are sanitized before any storage access
/// - A wrong master password and corrupted data are reported identically
pub trait EntryStore {
    /// Create the vault and seal `master` into it.
    ///
    /// # Errors
    ///
    /// - `AlreadyInitialized` if a sealed master secret already exists
    /// - `WeakSecret` if `master` fails the strength policy
    fn init(&self, master: &str) -> Result<()>;

    /// Whether the salt and sealed master secret are both present.
    fn is_initialized(&self) -> bool;

    /// Store `value` under `name`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if `name` fails sanitization
    /// - `WeakSecret` if `value` fails the strength policy
    /// - `NotInitialized` if the vault is missing
    /// - `IncorrectMasterPassword` if `master` does not unseal the vault
    fn put(&self, name: &str, value: &str, master: &str) -> Result<()>;

    /// Retrieve the value stored under `name`.
    ///
    /// # Errors
    ///
    /// - `InvalidName`, `NotInitialized`
    /// - `EntryNotFound` if nothing is stored under `name`
    /// - `IncorrectMasterPassword` if `master` is wrong or the entry is corrupted
    fn get(&self, name: &str, master: &str) -> Result<SecretString>;

    /// Delete the entry stored under `name`.
    ///
    /// # Errors
    ///
    /// - `InvalidName`, `NotInitialized`, `EntryNotFound`
    /// - `IncorrectMasterPassword`
    fn remove(&self, name: &str, master: &str) -> Result<()>;

    /// Names of all stored entries. Requires no master password.
    fn list(&self) -> Result<Vec<String>>;

    /// Delete the whole vault after validating `master`.
    fn implode(&self, master: &str) -> Result<()>;
}
