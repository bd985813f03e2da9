//! # Configuration
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. `roster.yaml` (or the file passed with `--config`)
//! 3. the `ROSTER_DATA_FILE` environment variable
//! 4. command line flags
//!
//! ## YAML Format
//!
//! ```yaml
//! data_file: students.txt
//! loader:
//!   enabled: true
//!   ticks: 5
//!   tick_millis: 300
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::CommandLine;

pub const DEFAULT_CONFIG_FILE: &str = "roster.yaml";
pub const DEFAULT_DATA_FILE: &str = "students.txt";
pub const DATA_FILE_ENV: &str = "ROSTER_DATA_FILE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Roster data file, loaded at startup and written on save
    pub data_file: PathBuf,
    pub loader: LoaderConfig,
}

/// Settings for the "Loading....." indicator shown after each menu choice
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub enabled: bool,
    pub ticks: u32,
    pub tick_millis: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            loader: LoaderConfig::default(),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ticks: 5,
            tick_millis: 300,
        }
    }
}

impl LoaderConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

impl AppConfig {
    /// Parse a YAML document; missing keys fall back to defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse roster configuration")
    }

    /// Load configuration from `path`, or from `roster.yaml` when no path is
    /// given. An explicitly named file must exist; the default one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !config_path.exists() {
            if required {
                anyhow::bail!("Config file {} does not exist", config_path.display());
            }
            debug!("No config file at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let yaml = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config = Self::from_yaml_str(&yaml)?;
        info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    }

    /// Apply the `ROSTER_DATA_FILE` override, if set
    pub fn with_data_file_override(mut self, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.data_file = PathBuf::from(value.trim());
        }
        self
    }

    /// Apply command line flags on top of everything else
    pub fn with_command_line(mut self, args: &CommandLine) -> Self {
        if let Some(data_file) = &args.data_file {
            self.data_file = data_file.clone();
        }
        if args.no_loader {
            self.loader.enabled = false;
        }
        self
    }

    /// Resolve the full configuration for a run
    pub fn resolve(args: &CommandLine) -> Result<Self> {
        let config = Self::load(args.config.as_deref())?
            .with_data_file_override(std::env::var(DATA_FILE_ENV).ok())
            .with_command_line(args);
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}
