//! # Configuration Module
//!
//! This module provides configuration support for monoheader, so the fixed
//! paths and constants of an amalgamation run live next to the project they
//! describe instead of on the command line.
//!
//! Configuration can be specified in a `.monoheader.toml` file or via the
//! `MONOHEADER_CONFIG` environment variable. Every key has a CLI flag
//! counterpart; flags win over the file, and the file wins over the built-in
//! defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name, discovered in the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = ".monoheader.toml";

/// Environment variable for specifying the config file path.
pub const CONFIG_ENV_VAR: &str = "MONOHEADER_CONFIG";

/// Default path of the license document embedded in the banner.
pub const DEFAULT_LICENSE_FILE: &str = "LICENSE";

/// Default directory holding the headers to merge.
pub const DEFAULT_HEADERS_DIR: &str = "src/include";

/// Default extension of the headers to merge, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "h";

/// Default path of the combined single-file header.
pub const DEFAULT_OUTPUT_FILE: &str = "single_header.h";

/// File name of the version stamp, written inside the headers directory.
/// It carries no extension, so header discovery never picks it up.
pub const STAMP_FILE_NAME: &str = "VERSION";

/// Main configuration struct for monoheader.
///
/// Every field is optional: a missing key falls through to the CLI flag or
/// the built-in default when [`Settings::resolve`] merges the layers.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
  /// Path of the license document embedded in the banner.
  #[serde(default, rename = "license-file")]
  pub license_file: Option<PathBuf>,

  /// Directory holding the headers to merge.
  #[serde(default, rename = "headers-dir")]
  pub headers_dir: Option<PathBuf>,

  /// Extension of the headers to merge, without the leading dot.
  #[serde(default)]
  pub extension: Option<String>,

  /// Path of the combined single-file header.
  #[serde(default)]
  pub output: Option<PathBuf>,

  /// Path of the version-stamp file.
  #[serde(default, rename = "stamp-file")]
  pub stamp_file: Option<PathBuf>,

  /// Canonical hosting location recorded in the banner metadata.
  #[serde(default, rename = "project-url")]
  pub project_url: Option<String>,

  /// File name of a self-include directive to drop from merged headers.
  #[serde(default, rename = "strip-include")]
  pub strip_include: Option<String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// The extension key includes a leading dot.
  #[error("Invalid extension '{extension}': extension should not include leading dot")]
  InvalidExtension { extension: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  ///
  /// # Returns
  ///
  /// The loaded configuration, or an error if the file cannot be read or
  /// parsed.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    Ok(config)
  }

  /// Validate the configuration.
  fn validate(&self) -> Result<(), ConfigError> {
    if let Some(ref extension) = self.extension {
      if extension.starts_with('.') {
        return Err(ConfigError::InvalidExtension {
          extension: extension.clone(),
        });
      }
    }
    Ok(())
  }
}

/// Fully resolved settings for one run: built-in defaults, overlaid by the
/// config file, overlaid by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  /// Path of the license document embedded in the banner.
  pub license_file: PathBuf,
  /// Directory holding the headers to merge.
  pub headers_dir: PathBuf,
  /// Extension of the headers to merge, without the leading dot.
  pub extension: String,
  /// Path of the combined single-file header.
  pub output: PathBuf,
  /// Path of the version-stamp file.
  pub stamp_file: PathBuf,
  /// Canonical hosting location recorded in the banner metadata.
  /// Has no sensible default; validated as present before any I/O.
  pub project_url: Option<String>,
  /// File name of a self-include directive to drop from merged headers.
  pub strip_include: Option<String>,
}

impl Settings {
  /// Merge the configuration layers into the settings for this run.
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration loaded from a file, if any
  /// * `cli` - Values taken from CLI flags, shaped as a [`Config`]
  ///
  /// # Returns
  ///
  /// The resolved settings. The stamp file defaults to [`STAMP_FILE_NAME`]
  /// inside the resolved headers directory.
  pub fn resolve(config: Option<Config>, cli: Config) -> Self {
    let file = config.unwrap_or_default();

    let headers_dir = cli
      .headers_dir
      .or(file.headers_dir)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_HEADERS_DIR));

    let stamp_file = cli
      .stamp_file
      .or(file.stamp_file)
      .unwrap_or_else(|| headers_dir.join(STAMP_FILE_NAME));

    Self {
      license_file: cli
        .license_file
        .or(file.license_file)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LICENSE_FILE)),
      headers_dir,
      extension: cli.extension.or(file.extension).unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
      output: cli.output.or(file.output).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
      stamp_file,
      project_url: cli.project_url.or(file.project_url),
      strip_include: cli.strip_include.or(file.strip_include),
    }
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `MONOHEADER_CONFIG` environment variable
/// 3. `.monoheader.toml` in the working directory
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
///
/// # Returns
///
/// The path to the configuration file, or `None` if no config file is found.
pub fn discover_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
  // 1. Explicit path from CLI takes highest priority
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  // 2. Check environment variable
  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  // 3. Check the working directory
  let local_config = PathBuf::from(DEFAULT_CONFIG_FILENAME);
  if local_config.exists() {
    verbose_log!("Using local config: {}", local_config.display());
    return Some(local_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path, if any.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `no_config` - If true, skip config file discovery entirely
pub fn load_config(explicit_path: Option<&Path>, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
