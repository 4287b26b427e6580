//! Catalog service configuration, loaded from environment variables.

use std::net::SocketAddr;

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// Maximum pooled SQLite connections.
    pub pool_max_size: usize,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout_ms: u64,
    /// Upper bound on a single request.
    pub request_timeout_secs: u64,
    /// Listen address for the Prometheus exporter.
    pub metrics_addr: SocketAddr,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            pool_max_size: 8,
            busy_timeout_ms: 5000,
            request_timeout_secs: 30,
            metrics_addr: SocketAddr::from(([0, 0, 0, 0], 9000)),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            pool_max_size: env_or("CATALOG_POOL_SIZE", defaults.pool_max_size),
            busy_timeout_ms: env_or("CATALOG_BUSY_TIMEOUT_MS", defaults.busy_timeout_ms),
            request_timeout_secs: env_or(
                "CATALOG_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
            metrics_addr: env_or("CATALOG_METRICS_ADDR", defaults.metrics_addr),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{key}={raw:?} is not valid -- using default");
            default
        }),
        Err(_) => default,
    }
}
