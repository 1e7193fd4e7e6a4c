//! # Hush Core
//!
//! Core library for Hush - a single-user, local, encrypted password vault.
//!
//! This crate provides the key-derivation and encryption envelope, the
//! master-password gate, and the file-backed entry store, independent of the
//! CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: Argon2id key derivation, AES-256-GCM blob codec, strength
//!   policy and password generation
//! - **envelope**: sealing and unsealing the master password
//! - **storage**: the `EntryStore` trait and the directory-backed `FileVault`
//! - **fs**: atomic file replacement

pub mod crypto;
pub mod envelope;
pub mod error;
pub mod fs;
pub mod storage;

pub use error::{HushError, Result};
pub use storage::{EntryName, EntryStore, FileVault};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
