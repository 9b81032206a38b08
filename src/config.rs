//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;
use crate::service::DEFAULT_DETAIL_CONCURRENCY;

/// Public PokeAPI root used when no override is configured.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Root of the upstream REST API
    pub upstream_base_url: String,
    /// Per-request upstream timeout in seconds
    pub request_timeout: u64,
    /// Lifetime of cached results in seconds
    pub cache_ttl: u64,
    /// Whether the facade consults the cache at all
    pub cache_enabled: bool,
    /// Expired-entry sweeper interval in seconds
    pub cleanup_interval: u64,
    /// Maximum in-flight detail fetches while resolving a list page
    pub detail_concurrency: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_BASE_URL` - Upstream API root (default: PokeAPI v2)
    /// - `REQUEST_TIMEOUT` - Upstream timeout in seconds (default: 30)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 3600)
    /// - `CACHE_ENABLED` - Enable result caching (default: true)
    /// - `CLEANUP_INTERVAL` - Sweeper frequency in seconds (default: 60)
    /// - `DETAIL_CONCURRENCY` - Parallel detail fetches per list (default: 4)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.upstream_base_url),
            request_timeout: parse_var("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cache_enabled: parse_var("CACHE_ENABLED").unwrap_or(defaults.cache_enabled),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            detail_concurrency: parse_var::<usize>("DETAIL_CONCURRENCY")
                .unwrap_or(defaults.detail_concurrency)
                .max(1),
        }
    }

    /// Upstream timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            request_timeout: 30,
            cache_ttl: DEFAULT_TTL_SECS,
            cache_enabled: true,
            cleanup_interval: 60,
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
        }
    }
}
