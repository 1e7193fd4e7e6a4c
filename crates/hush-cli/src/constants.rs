//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error
/// - 2: Misuse of shell command (clap argument errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Anything without a more specific code.
    pub const GENERAL: i32 = 1;

    /// Vault or entry not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Wrong master password or corrupted vault data.
    pub const AUTH_FAILED: i32 = 5;
}

/// Master password for non-interactive use.
pub const MASTER_PASSWORD_ENV: &str = "HUSH_MASTER_PASSWORD";

/// Config file override.
pub const CONFIG_ENV: &str = "HUSH_CONFIG";

/// Log filter directives, `tracing_subscriber::EnvFilter` syntax.
pub const LOG_ENV: &str = "HUSH_LOG";

/// Vault directory name under `$HOME`.
pub const DEFAULT_VAULT_DIR: &str = ".hush";

/// Default length for `hush generate`.
pub const DEFAULT_GENERATE_LENGTH: usize = 16;
