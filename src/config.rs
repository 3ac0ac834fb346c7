//! Console configuration loaded from `roster.toml`.
//!
//! ```toml
//! census_on_regenerate = "carry"   # or "reset"
//! fallback_ratio = "1:4"
//!
//! [ratios]
//! RN = "1:1"
//!
//! [[staff_types]]
//! title = "Registered Nurse"
//! code = "RN"
//! ```
//!
//! Every key is optional; an empty document yields [`ConsoleConfig::default`].
//! Ratio strings are validated while parsing, seed staff types when the
//! console is built from the config.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::calculator::{CensusPolicy, RatioTable};
use crate::error::ValidationError;
use crate::ratio::Ratio;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid seed staff type '{title}': {source}")]
    Seed {
        title: String,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedStaffType {
    pub title: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ConsoleConfig {
    pub census_on_regenerate: CensusPolicy,
    pub fallback_ratio: Ratio,
    /// Per-code ratios that take precedence over the built-in defaults.
    pub ratios: HashMap<String, Ratio>,
    pub staff_types: Vec<SeedStaffType>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            census_on_regenerate: CensusPolicy::default(),
            fallback_ratio: Ratio::FALLBACK,
            ratios: HashMap::new(),
            staff_types: default_staff_types(),
        }
    }
}

impl ConsoleConfig {
    pub fn ratio_table(&self) -> RatioTable {
        RatioTable::new(self.ratios.clone(), self.fallback_ratio)
    }
}

fn default_staff_types() -> Vec<SeedStaffType> {
    [
        ("Registered Nurse", "RN"),
        ("Licensed Practical Nurse", "LPN"),
        ("Certified Nursing Assistant", "CNA"),
        ("Unit Coordinator", "UC"),
        ("Medical Assistant", "MA"),
    ]
    .into_iter()
    .map(|(title, code)| SeedStaffType {
        title: title.to_string(),
        code: code.to_string(),
    })
    .collect()
}

pub fn load_config_str(s: &str) -> Result<ConsoleConfig, ConfigError> {
    Ok(toml::from_str(s)?)
}

pub fn load_config_path(path: impl AsRef<Path>) -> Result<ConsoleConfig, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_config_str(&text)
}

/// Like [`load_config_path`], but a missing file means defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ConsoleConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(ConsoleConfig::default());
    }
    load_config_path(path)
}
