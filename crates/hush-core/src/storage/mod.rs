//! Storage abstraction layer for Hush.
//!
//! This module defines the `EntryStore` trait and the directory-backed
//! `FileVault` implementation.

pub mod file_vault;
pub mod layout;
pub mod name;
pub mod traits;

pub use file_vault::FileVault;
pub use layout::VaultLayout;
pub use name::EntryName;
pub use traits::EntryStore;
