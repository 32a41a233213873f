//! CLI configuration management
//!
//! Loads configuration from a TOML file, environment variables and CLI flags.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use duopoly_core::market::{DEFAULT_INCUMBENT_PRICE, DEFAULT_INCUMBENT_QUALITY};
use duopoly_core::IncumbentPolicy;
use duopoly_optimiser::{LinearGrid, OptimiserError, SearchConfig, SweepConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;

/// Config file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_FILE: &str = "duopoly.toml";

/// Errors raised while resolving the CLI configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("Invalid incumbent: {0}")]
    InvalidIncumbent(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error(transparent)]
    Grid(#[from] OptimiserError),
}

/// Verbosity of the diagnostic log written to stderr.
///
/// Stored as a [`tracing::Level`] and written lowercase in TOML and JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogLevel(Level);

impl LogLevel {
    /// Everything, including per-search traces
    pub const TRACE: Self = Self(Level::TRACE);
    /// Sweep progress and grid sizes
    pub const DEBUG: Self = Self(Level::DEBUG);
    /// Command progress
    pub const INFO: Self = Self(Level::INFO);
    /// Warnings only
    pub const WARN: Self = Self(Level::WARN);
    /// Errors only
    pub const ERROR: Self = Self(Level::ERROR);

    /// Most verbose level that is still emitted.
    pub fn filter(self) -> LevelFilter {
        LevelFilter::from_level(self.0)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Level>()
            .map(Self)
            .map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_string()
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.as_str().to_ascii_lowercase())
    }
}

/// Incumbent firm settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncumbentConfig {
    /// Quality of the incumbent's product
    pub quality: f64,
    /// Price charged when the incumbent does not respond
    pub price: f64,
}

impl Default for IncumbentConfig {
    fn default() -> Self {
        Self {
            quality: DEFAULT_INCUMBENT_QUALITY,
            price: DEFAULT_INCUMBENT_PRICE,
        }
    }
}

/// Top-level CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuopolyConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Incumbent firm settings
    pub incumbent: IncumbentConfig,
    /// Candidate prices for the optimal price search
    pub price_grid: LinearGrid,
    /// Qualities evaluated by the sweep
    pub quality_grid: LinearGrid,
}

impl Default for DuopolyConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::INFO,
            incumbent: IncumbentConfig::default(),
            price_grid: LinearGrid::reference_prices(),
            quality_grid: LinearGrid::reference_qualities(),
        }
    }
}

impl DuopolyConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DuopolyConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("DUOPOLY_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(quality) = lookup("DUOPOLY_INCUMBENT_QUALITY") {
            self.incumbent.quality = parse_env_f64("DUOPOLY_INCUMBENT_QUALITY", &quality)?;
        }

        if let Some(price) = lookup("DUOPOLY_INCUMBENT_PRICE") {
            self.incumbent.price = parse_env_f64("DUOPOLY_INCUMBENT_PRICE", &price)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(quality) = cli.incumbent_quality {
            self.incumbent.quality = quality;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.incumbent.quality.is_finite() && self.incumbent.quality > 0.0) {
            return Err(ConfigError::InvalidIncumbent(format!(
                "quality must be positive (got {})",
                self.incumbent.quality
            )));
        }
        if !self.incumbent.price.is_finite() {
            return Err(ConfigError::InvalidIncumbent(format!(
                "price must be finite (got {})",
                self.incumbent.price
            )));
        }
        self.sweep_config().validate()?;
        Ok(())
    }

    /// Search configuration derived from this config
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_price_grid(self.price_grid)
            .with_incumbent_quality(self.incumbent.quality)
    }

    /// Sweep configuration derived from this config
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig::default()
            .with_quality_grid(self.quality_grid)
            .with_search(self.search_config())
    }

    /// Incumbent pricing behaviour
    pub fn incumbent_policy(&self, responds: bool) -> IncumbentPolicy {
        if responds {
            IncumbentPolicy::BestResponse
        } else {
            IncumbentPolicy::Fixed {
                price: self.incumbent.price,
            }
        }
    }
}

fn parse_env_f64(name: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{} is not a number: {}", name, value)))
}

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Incumbent quality override
    pub incumbent_quality: Option<f64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliOverrides) -> Result<DuopolyConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => DuopolyConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            DuopolyConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => DuopolyConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
