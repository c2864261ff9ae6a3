//! Configuration Module
//!
//! Cache tuning parameters and server configuration loaded from
//! environment variables.

use std::env;
use std::time::Duration;

/// Tuning parameters for a single cache instance.
///
/// A plain value struct with no environment coupling, so tests and
/// embedders can construct isolated instances with explicit settings.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// TTL applied when a set omits one (or passes zero)
    pub default_ttl: Duration,
    /// Interval between background sweeps of expired entries
    pub sweep_interval: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 5000,
            default_ttl: Duration::from_millis(300_000),
            sweep_interval: Duration::from_millis(120_000),
        }
    }
}

/// Server configuration: cache settings plus the HTTP listen port.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache instance settings
    pub cache: CacheConfig,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `KLIQ_CACHE_CAPACITY` - Maximum cache entries (default: 5000)
    /// - `KLIQ_CACHE_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `KLIQ_CACHE_SWEEP_INTERVAL_MS` - Sweep period in milliseconds (default: 120000)
    /// - `KLIQ_CACHE_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = CacheConfig::default();
        Self {
            cache: CacheConfig {
                capacity: env::var("KLIQ_CACHE_CAPACITY")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.capacity),
                default_ttl: env::var("KLIQ_CACHE_DEFAULT_TTL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.default_ttl),
                sweep_interval: env::var("KLIQ_CACHE_SWEEP_INTERVAL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.sweep_interval),
            },
            server_port: env::var("KLIQ_CACHE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, 5000);
        assert_eq!(config.default_ttl, Duration::from_millis(300_000));
        assert_eq!(config.sweep_interval, Duration::from_millis(120_000));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("KLIQ_CACHE_CAPACITY");
        env::remove_var("KLIQ_CACHE_DEFAULT_TTL_MS");
        env::remove_var("KLIQ_CACHE_SWEEP_INTERVAL_MS");
        env::remove_var("KLIQ_CACHE_PORT");

        let config = Config::from_env();
        assert_eq!(config.cache.capacity, 5000);
        assert_eq!(config.cache.default_ttl, Duration::from_millis(300_000));
        assert_eq!(config.cache.sweep_interval, Duration::from_millis(120_000));
        assert_eq!(config.server_port, 3000);
    }
}
