use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::mcs::McsStrategy;
use crate::query::ChordalityConfig;

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "chordal.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordalConfig {
    #[serde(default)]
    pub mcs: McsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McsConfig {
    #[serde(default)]
    pub strategy: McsStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `pretty`, `text` or `json`; unset means decide from the terminal.
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub show_order: bool,
}

impl ChordalConfig {
    /// Algorithm options derived from this file configuration.
    #[must_use]
    pub const fn chordality(&self, verbose: bool) -> ChordalityConfig {
        ChordalityConfig {
            strategy: self.mcs.strategy,
            verbose,
        }
    }

    /// Overlay `other` on `self`: any section value `other` sets explicitly
    /// wins.
    #[must_use]
    pub fn merged_with(mut self, other: PartialConfig) -> Self {
        if let Some(strategy) = other.mcs.strategy {
            self.mcs.strategy = strategy;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if let Some(show_order) = other.output.show_order {
            self.output.show_order = show_order;
        }
        self
    }
}

/// A config file as written, with every field optional so layering can tell
/// "unset" from "set to the default".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialConfig {
    #[serde(default)]
    pub mcs: PartialMcs,
    #[serde(default)]
    pub output: PartialOutput,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialMcs {
    pub strategy: Option<McsStrategy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialOutput {
    pub format: Option<String>,
    pub show_order: Option<bool>,
}

fn load_partial(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        return Ok(PartialConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<PartialConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// `<config_dir>/chordal/config.toml`, if the platform has a config dir.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chordal/config.toml"))
}

pub fn load_project_config(project_root: &Path) -> Result<PartialConfig> {
    load_partial(&project_root.join(PROJECT_CONFIG_FILE))
}

pub fn load_user_config() -> Result<PartialConfig> {
    let Some(path) = user_config_path() else {
        return Ok(PartialConfig::default());
    };
    load_partial(&path)
}

/// Defaults, then the user file, then `./chordal.toml`.
pub fn resolve_config(project_root: &Path) -> Result<ChordalConfig> {
    let user = load_user_config()?;
    let project = load_project_config(project_root)?;
    Ok(ChordalConfig::default().merged_with(user).merged_with(project))
}
