//! Configuration handling for RegionView CLI
//!
//! Supports loading configuration from regionview.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use clap::ValueEnum;
use regionview_core::ViewerParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;

pub const DEFAULT_CONFIG_FILE: &str = "regionview.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerParams,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format for command results
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Decimal places printed for pixel values
    #[serde(default = "default_precision")]
    pub precision: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

fn default_format() -> OutputFormat { OutputFormat::Table }
fn default_precision() -> usize { 2 }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            precision: default_precision(),
        }
    }
}

/// Viewer settings given on the command line; each one replaces the
/// configured value when present.
#[derive(Debug, Clone, Default)]
pub struct ViewerOverrides {
    pub padding: Option<i64>,
    pub width: Option<f64>,
    pub feature_types: Vec<String>,
    pub all_features: bool,
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::info!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(CliError::from)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        let content = toml::to_string_pretty(&Self::default())
            .map_err(CliError::from)
            .context("Failed to serialize default configuration")?;
        Ok(content)
    }

    pub fn apply_overrides(&mut self, overrides: &ViewerOverrides) {
        if let Some(padding) = overrides.padding {
            self.viewer.padding = padding;
        }
        if let Some(width) = overrides.width {
            self.viewer.width = width;
        }
        if overrides.all_features {
            self.viewer.feature_types.clear();
        } else if !overrides.feature_types.is_empty() {
            self.viewer.feature_types = overrides.feature_types.clone();
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
    }
}
