//! Configuration loading for the shop simulation runner.
//!
//! The shop manifest lives in `gildedrose-config.yaml` at the project root
//! (overridable via the first command-line argument). This module defines
//! strongly-typed structs mirroring the YAML structure and a loader that
//! reads the file.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading the shop manifest.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the manifest file from disk.
    #[error("failed to read shop manifest: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse shop manifest YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level shop manifest.
///
/// Mirrors the structure of `gildedrose-config.yaml`: simulation settings
/// plus the opening stock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShopConfig {
    /// Simulation settings (how many days to run).
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// The opening stock, in shelf order.
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

impl ShopConfig {
    /// Load a shop manifest from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if it is not valid YAML for this structure.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&text)?)
    }
}

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Number of days to simulate.
    #[serde(default = "default_days")]
    pub days: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
        }
    }
}

/// Default simulated day count when the manifest does not set one.
const fn default_days() -> u64 {
    30
}

/// One item of opening stock as written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemEntry {
    /// Display name; also determines the item's category.
    pub name: String,
    /// Days remaining before the sell-by date.
    pub sell_in: i32,
    /// Starting quality.
    pub quality: i32,
}
