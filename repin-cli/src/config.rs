//! Configuration file loading for repin.
//!
//! Discovers and loads `repin.toml` from the repository root. Flags merge
//! as OR: an option enabled in either the config file or on the command
//! line stays enabled.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use repin_types::TransformerOptions;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "repin.toml";

/// Top-level configuration from repin.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepinConfig {
    /// Default transform options.
    pub transform: TransformConfig,
}

/// Transform section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Default to computing without writing.
    pub dry: bool,

    /// Always render diffs.
    pub print: bool,

    /// Runner-contract passthrough; unused by the pin transform.
    pub force: bool,
}

/// Discover the repin.toml config file at the repository root.
pub fn discover_config(repo_root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = repo_root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a repin.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<RepinConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<RepinConfig> {
    let config: RepinConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the repo root, or return defaults if not found.
pub fn load_or_default(repo_root: &Utf8Path) -> anyhow::Result<RepinConfig> {
    match discover_config(repo_root) {
        Some(path) => load_config(&path),
        None => Ok(RepinConfig::default()),
    }
}

/// Merge config-file defaults with CLI flags.
pub fn merge_options(config: &RepinConfig, dry: bool, print: bool, force: bool) -> TransformerOptions {
    TransformerOptions {
        force: force || config.transform.force,
        dry: dry || config.transform.dry,
        print: print || config.transform.print,
    }
}
