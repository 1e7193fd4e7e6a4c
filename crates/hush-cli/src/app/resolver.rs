//! Path resolution for the config file and the vault directory.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_vault_path, expand_home, read_config, HushConfig};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking HUSH_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when there is none.
pub fn load_config() -> anyhow::Result<HushConfig> {
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(HushConfig::default());
    }
    tracing::debug!(path = %config_path.display(), "loading config");
    read_config(&config_path)
}

/// Resolve the vault directory: `--vault` / `HUSH_DIR`, then config, then `~/.hush`.
pub fn resolve_vault_path(cli: &Cli, config: &HushConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.vault.clone() {
        return Ok(path);
    }
    if let Some(path) = config.vault.path.as_deref() {
        if !path.trim().is_empty() {
            return expand_home(path.trim());
        }
    }
    default_vault_path()
}
