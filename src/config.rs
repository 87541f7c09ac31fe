//! Detector configuration.
//!
//! Handles loading and validating `sobel.toml`. Every key is optional; a
//! missing file means stock defaults. Command-line flags are applied on top
//! via [`DetectConfig::apply`].
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [threads]
//! policy = "core-aware"        # or "static-tiers"
//! pixels_per_thread = 250000   # core-aware budget per worker
//! # count = 4                  # explicit worker count (omit for heuristic)
//!
//! [output]
//! jpeg_quality = 90            # 1-100
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::filter::{DEFAULT_PIXELS_PER_THREAD, ThreadPolicy};
use crate::imaging::Quality;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Top-level configuration loaded from `sobel.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectConfig {
    /// Worker-count selection.
    pub threads: ThreadsConfig,
    /// Encoder settings.
    pub output: OutputConfig,
}

/// Named thread policy as written in config files and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyName {
    /// Fixed tiers by pixel count: 1, 2, 4 or 8 workers.
    StaticTiers,
    /// One worker per `pixels_per_thread`, capped at the CPU count.
    #[default]
    CoreAware,
}

/// Worker-count settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThreadsConfig {
    /// Heuristic used when `count` is absent.
    pub policy: PolicyName,
    /// Pixels per worker for the core-aware policy.
    pub pixels_per_thread: usize,
    /// Explicit worker count. Overrides the heuristic; must be positive.
    pub count: Option<usize>,
}

impl Default for ThreadsConfig {
    fn default() -> Self {
        Self {
            policy: PolicyName::default(),
            pixels_per_thread: DEFAULT_PIXELS_PER_THREAD,
            count: None,
        }
    }
}

impl ThreadsConfig {
    /// The heuristic these settings describe.
    pub fn policy(&self) -> ThreadPolicy {
        match self.policy {
            PolicyName::StaticTiers => ThreadPolicy::StaticTiers,
            PolicyName::CoreAware => ThreadPolicy::CoreAware {
                pixels_per_thread: self.pixels_per_thread,
            },
        }
    }
}

/// Encoder settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// JPEG encoding quality (1 = worst, 100 = best). Ignored for PGM.
    pub jpeg_quality: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { jpeg_quality: 90 }
    }
}

impl OutputConfig {
    pub fn quality(&self) -> Quality {
        Quality::new(self.jpeg_quality)
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub threads: Option<usize>,
    pub policy: Option<PolicyName>,
    pub jpeg_quality: Option<u32>,
}

impl DetectConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads.count == Some(0) {
            return Err(ConfigError::Validation(
                "threads.count must be a positive integer".into(),
            ));
        }
        if self.threads.pixels_per_thread == 0 {
            return Err(ConfigError::Validation(
                "threads.pixels_per_thread must be non-zero".into(),
            ));
        }
        if !(1..=100).contains(&self.output.jpeg_quality) {
            return Err(ConfigError::Validation(
                "output.jpeg_quality must be 1-100".into(),
            ));
        }
        Ok(())
    }

    /// Layer command-line overrides on top and re-validate.
    pub fn apply(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(n) = overrides.threads {
            self.threads.count = Some(n);
        }
        if let Some(policy) = overrides.policy {
            self.threads.policy = policy;
        }
        if let Some(q) = overrides.jpeg_quality {
            self.output.jpeg_quality = q;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Load and validate a config file.
///
/// A missing file yields the stock defaults. A present file is parsed
/// sparsely on top of defaults; unknown keys are an error.
pub fn load_config(path: &Path) -> Result<DetectConfig, ConfigError> {
    if !path.exists() {
        return Ok(DetectConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: DetectConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `sobel.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Sobel edge detector configuration
# ==================================
# All settings are optional. Values shown below are the defaults.
# Command-line flags override anything set here.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Worker threads
# ---------------------------------------------------------------------------
[threads]
# How to size the worker pool when no explicit count is given:
#   "core-aware"   - one worker per `pixels_per_thread` pixels, capped at the
#                    number of CPUs
#   "static-tiers" - 1 worker below 512000 px, 2 below 1024000, 4 below
#                    4096000, else 8
policy = "core-aware"

# Pixels each worker should get before another one is added (core-aware).
pixels_per_thread = 250000

# Explicit worker count. Must be a positive integer. Omit for the heuristic.
# count = 4

# ---------------------------------------------------------------------------
# Output encoding
# ---------------------------------------------------------------------------
[output]
# JPEG quality (1-100). PGM output is always lossless.
jpeg_quality = 90
"##
}
