use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hush_core::crypto::StrengthPolicy;

use crate::constants::{DEFAULT_GENERATE_LENGTH, DEFAULT_VAULT_DIR};

/// Contents of `config.toml`. Every section is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HushConfig {
    pub vault: VaultSection,
    pub policy: PolicySection,
    pub generate: GenerateSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySection {
    pub require_symbol: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateSection {
    pub length: usize,
}

impl Default for GenerateSection {
    fn default() -> Self {
        Self {
            length: DEFAULT_GENERATE_LENGTH,
        }
    }
}

impl HushConfig {
    pub fn strength_policy(&self) -> StrengthPolicy {
        if self.policy.require_symbol {
            StrengthPolicy::strict()
        } else {
            StrengthPolicy::standard()
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_vault_path() -> anyhow::Result<PathBuf> {
    Ok(home_dir()?.join(DEFAULT_VAULT_DIR))
}

pub fn read_config(path: &Path) -> anyhow::Result<HushConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Expand a leading `~/` against `$HOME`.
pub fn expand_home(path: &str) -> anyhow::Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(path)),
    }
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("hush"));
        }
    }
    Ok(home_dir()?.join(".config").join("hush"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
