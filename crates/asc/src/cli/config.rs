//! Optional TOML configuration.
//!
//! Looked up at `$ASC_CONFIG` (or `--config`), else
//! `<config dir>/asc/config.toml`. A missing file means defaults.

use super::error::HelpfulError;
use anyhow::Result;
use asc_table::Layout;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "ASC_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub table: TableConfig,
    pub detail: DetailConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Box style name; unknown names fall back to `rounded`.
    pub style: Option<String>,
    /// Semantic status colouring when stdout is a terminal.
    pub color: bool,
    pub max_width: Option<u16>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            style: None,
            color: true,
            max_width: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetailConfig {
    pub layout: Option<String>,
    pub columns_per_row: Option<usize>,
    pub column_min_width: Option<u16>,
    pub column_max_width: Option<u16>,
}

impl DetailConfig {
    pub fn layout(&self) -> Result<Option<Layout>> {
        match self.layout.as_deref() {
            None => Ok(None),
            Some(name) => match name.parse::<Layout>() {
                Ok(layout) => Ok(Some(layout)),
                Err(_) => Err(HelpfulError::invalid_layout(name)
                    .with_context("Set by [detail] layout in the config file")
                    .into()),
            },
        }
    }
}

/// Default config location: `<config dir>/asc/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("asc").join("config.toml"))
}

impl Config {
    /// Load from `explicit`, else the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config directory; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found; using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| HelpfulError::invalid_config(path, &e.to_string()))?;
        let config = Self::parse(&content)
            .map_err(|e| HelpfulError::invalid_config(path, e.message()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
