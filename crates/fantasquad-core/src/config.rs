// Configuration loading and parsing (fantasquad.toml).
//
// Every section and key is optional; a missing file yields the built-in
// defaults. Relative roster paths are resolved against the directory that
// holds the config file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::lineup::{FormationChoice, Strategy};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "fantasquad.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lineup: LineupConfig,
    pub source: SourceConfig,
    pub output: OutputConfig,
}

/// `[lineup]`: which formations to try and how to fill them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LineupConfig {
    pub formation: FormationChoice,
    pub strategy: Strategy,
}

/// `[source]`: where the roster comes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub roster: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            roster: PathBuf::from("data/roster.csv"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `[output]`: how the lineup is reported.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load `fantasquad.toml` from `base_dir`, falling back to defaults when the
/// file does not exist.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join(CONFIG_FILE);
    if !path.exists() {
        let mut config = Config::default();
        resolve_paths(&mut config, base_dir);
        validate(&config)?;
        return Ok(config);
    }
    load_config_file(&path)
}

/// Load an explicitly named config file. The file must exist.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let text = read_file(path)?;
    let mut config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    resolve_paths(&mut config, base_dir);
    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn resolve_paths(config: &mut Config, base_dir: &Path) {
    let roster = &config.source.roster;
    if roster.is_relative() && !roster.as_os_str().is_empty() {
        config.source.roster = base_dir.join(roster);
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.source.roster.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "source.roster".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
