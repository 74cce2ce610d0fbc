//! Engine configuration.
//!
//! Loaded from a TOML file with environment-variable overrides, defaulting
//! field by field so a partial file is fine and a missing file falls back to
//! the built-in defaults.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::constants::{eligibility, geo, scoring};

/// Configuration load failures. A missing default config file is not an
/// error (defaults apply); an unreadable explicit path or invalid TOML is.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration file '{path}'")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Tunable engine parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Days between completed donations before a donor is eligible again.
    #[serde(default = "default_recovery_window_days")]
    pub recovery_window_days: u32,
    /// Points granted per completed donation.
    #[serde(default = "default_points_per_donation")]
    pub points_per_donation: u32,
    /// Cap on nearest-donor results.
    #[serde(default = "default_nearby_limit")]
    pub nearby_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recovery_window_days: default_recovery_window_days(),
            points_per_donation: default_points_per_donation(),
            nearby_limit: default_nearby_limit(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from `LIFELINK_CONFIG_PATH` (default
    /// `lifelink.toml`), then applies environment overrides. A missing file
    /// falls back to defaults with a warning; an invalid file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("LIFELINK_CONFIG_PATH")
            .unwrap_or_else(|_| "lifelink.toml".to_string());

        let config = match fs::read_to_string(&path) {
            Ok(raw) => parse(&raw, &path)?,
            Err(_) => {
                warn!(
                    "configuration file '{}' not found, using default configuration",
                    path
                );
                Self::default()
            }
        };

        Ok(config.apply_env())
    }

    /// Loads configuration from an explicit path. Unlike [`EngineConfig::load`],
    /// a missing file is an error here.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: display.clone(), source })?;
        Ok(parse(&raw, &display)?.apply_env())
    }

    /// Applies environment-variable overrides on top of the loaded values.
    pub fn apply_env(mut self) -> Self {
        if let Ok(window) = std::env::var("LIFELINK_RECOVERY_WINDOW_DAYS") {
            if let Ok(days) = window.parse::<u32>() {
                info!(recovery_window_days = days, "recovery window overridden");
                self.recovery_window_days = days;
            }
        }
        if let Ok(points) = std::env::var("LIFELINK_POINTS_PER_DONATION") {
            if let Ok(points) = points.parse::<u32>() {
                self.points_per_donation = points;
            }
        }
        if let Ok(limit) = std::env::var("LIFELINK_NEARBY_LIMIT") {
            if let Ok(limit) = limit.parse::<usize>() {
                self.nearby_limit = limit;
            }
        }
        self
    }
}

fn parse(raw: &str, path: &str) -> Result<EngineConfig, ConfigError> {
    toml::from_str(raw).map_err(|source| ConfigError::Parse { path: path.to_string(), source })
}

fn default_recovery_window_days() -> u32 {
    eligibility::DEFAULT_RECOVERY_WINDOW_DAYS
}
fn default_points_per_donation() -> u32 {
    scoring::DEFAULT_POINTS_PER_DONATION
}
fn default_nearby_limit() -> usize {
    geo::DEFAULT_NEARBY_LIMIT
}
