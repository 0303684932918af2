//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bloodline/bloodline.toml`
//! 3. Explicit config file passed on the command line (`--config`)
//! 4. Environment variables: `BLOODLINE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::tree_traits::LabelStyle;

/// Tree rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the conversion year next to each name
    pub show_years: bool,
    /// Show the descendant count next to each name
    pub show_counts: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_years: true,
            show_counts: false,
        }
    }
}

impl DisplayConfig {
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            show_years: self.show_years,
            show_counts: self.show_counts,
        }
    }
}

/// Raw display config for intermediate parsing (None → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawDisplayConfig {
    pub show_years: Option<bool>,
    pub show_counts: Option<bool>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub lineage_file: Option<PathBuf>,
    pub display: RawDisplayConfig,
}

/// Unified configuration for bloodline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Lineage file used when `--file` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineage_file: Option<PathBuf>,
    /// Tree rendering settings
    pub display: DisplayConfig,
}

/// Get the XDG config directory for bloodline.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bloodline").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bloodline.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins where it is set.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            lineage_file: overlay
                .lineage_file
                .clone()
                .or_else(|| self.lineage_file.clone()),
            display: DisplayConfig {
                show_years: overlay
                    .display
                    .show_years
                    .unwrap_or(self.display.show_years),
                show_counts: overlay
                    .display
                    .show_counts
                    .unwrap_or(self.display.show_counts),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), config_file)
    }

    /// Load settings from an explicit global path and optional config file.
    ///
    /// A missing global file is skipped, a missing `config_file` is an error.
    pub fn load_layers(
        global: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("loading config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current)
    }

    /// Apply BLOODLINE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BLOODLINE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("lineage_file") {
            settings.lineage_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_bool("display.show_years") {
            settings.display.show_years = val;
        }
        if let Ok(val) = config.get_bool("display.show_counts") {
            settings.display.show_counts = val;
        }

        Ok(settings)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
