//! Application context for the Hush CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use once_cell::unsync::OnceCell;

use hush_core::FileVault;

use crate::cli::Cli;
use crate::config::HushConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_vault_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<HushConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&HushConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// The vault at the resolved path, with the configured strength policy.
    pub fn vault(&self) -> anyhow::Result<FileVault> {
        let config = self.config()?;
        let path = resolve_vault_path(self.cli, config)?;
        tracing::debug!(vault = %path.display(), "resolved vault path");
        Ok(FileVault::new(path).with_policy(config.strength_policy()))
    }

    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.no_color, self.cli.quiet)
    }
}
