//! Cryptographic operations for Hush.
//!
//! - **Argon2id**: memory-hard key derivation from a password and the vault salt
//! - **AES-256-GCM**: authenticated encryption of individual secrets
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the vault directory
//! - Offline brute-force attacks on the master password
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Concurrent writers to the same vault

pub mod cipher;
pub mod generator;
pub mod kdf;
pub mod strength;

pub use cipher::{decode_blob, decrypt, encode_blob, encrypt};
pub use generator::generate_password;
pub use kdf::{derive_key, derive_key_from_slice, DerivedKey, Salt, KEY_LENGTH, SALT_LENGTH};
pub use strength::{check_strength, StrengthPolicy};
