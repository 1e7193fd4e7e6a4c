//! Application-level utilities for the Hush CLI.
//!
//! This module provides:
//! - Path resolution for the config file and the vault
//! - The per-invocation `AppContext`

mod context;
mod resolver;

pub use context::AppContext;
