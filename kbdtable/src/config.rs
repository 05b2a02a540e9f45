//! Optional TOML configuration for the `kbdtable` tool

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kbdlayout_core::{ConfigurationError, KeyboardType};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fallback keyboard type when neither the command line nor the
    /// definition file sets one
    pub keyboard_type: Option<u8>,
    /// Extra directories searched for `#include` files
    pub include_dirs: Vec<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        if let Some(value) = config.keyboard_type {
            KeyboardType::new(value)?;
        }
        Ok(config)
    }
}

/// Picks the active keyboard type: command line, then `#define KBD_TYPE`
/// in the definition, then the config file, then the default (4)
pub fn select_keyboard_type(
    command_line: Option<u8>,
    definition: Option<KeyboardType>,
    config: &Config,
) -> Result<KeyboardType, ConfigurationError> {
    if let Some(value) = command_line {
        return KeyboardType::new(value);
    }
    if let Some(keyboard_type) = definition {
        return Ok(keyboard_type);
    }
    match config.keyboard_type {
        Some(value) => KeyboardType::new(value),
        None => Ok(KeyboardType::default()),
    }
}
