//! Resolution configuration.

use serde::Deserialize;
use std::time::Duration;

/// Tunables for the caching and pacing layers. Callers embed this in their
/// own configuration file; every field has a default, so an empty table is
/// valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeocodeConfig {
    /// Pause between upstream requests within a batch, in milliseconds.
    #[serde(default = "default_request_pause_ms")]
    pub request_pause_ms: u64,
    /// Maximum postal codes kept in the cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Cache entry lifetime in minutes.
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            request_pause_ms: default_request_pause_ms(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl GeocodeConfig {
    /// The inter-request pause as a [`Duration`].
    pub const fn request_pause(&self) -> Duration {
        Duration::from_millis(self.request_pause_ms)
    }
}

fn default_request_pause_ms() -> u64 {
    200
}
fn default_cache_capacity() -> u64 {
    1024
}
fn default_cache_ttl_minutes() -> u64 {
    1440
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_takes_all_defaults() {
        let config: GeocodeConfig = toml::from_str("").unwrap();
        assert_eq!(config, GeocodeConfig::default());
        assert_eq!(config.request_pause(), Duration::from_millis(200));
    }

    #[test]
    fn fields_override_independently() {
        let config: GeocodeConfig = toml::from_str("request_pause_ms = 500\n").unwrap();
        assert_eq!(config.request_pause_ms, 500);
        assert_eq!(config.cache_capacity, 1024);
    }
}
