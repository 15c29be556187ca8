//! HTTP server configuration object and settings loading.

use std::ffi::OsString;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use prometheus::Registry;
use serde::Deserialize;

use signup_service::outbound::persistence::{DbPool, PoolConfig};

const DEFAULT_POOL_MAX_SIZE: u32 = 25;
const DEFAULT_POOL_MIN_IDLE: u32 = 5;
const DEFAULT_POOL_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) registry: Registry,
}

impl ServerConfig {
    /// Construct a server configuration with a fresh metrics registry.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            registry: Registry::new(),
        }
    }
}

/// Pool tuning settings sourced from `SIGNUP_DB_*` environment variables.
///
/// Every field is optional; accessors fall back to the service defaults.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNUP_DB")]
pub struct DatabaseSettings {
    /// Upper bound on open connections.
    pub pool_max_size: Option<u32>,
    /// Connections kept idle and ready between requests.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a checkout before reporting the pool exhausted.
    pub pool_connection_timeout_secs: Option<u64>,
}

impl DatabaseSettings {
    /// Load settings from the environment, ignoring command-line arguments.
    ///
    /// # Errors
    /// Returns an error when a variable is set but cannot be parsed.
    pub fn from_env() -> ortho_config::OrthoResult<Self> {
        Self::load_from_iter([OsString::from("signup-service")])
    }

    /// Return the configured maximum pool size, falling back to the default.
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Return the configured idle floor, falling back to the default.
    #[must_use]
    pub fn pool_min_idle(&self) -> u32 {
        self.pool_min_idle.unwrap_or(DEFAULT_POOL_MIN_IDLE)
    }

    /// Return the configured checkout timeout, falling back to the default.
    #[must_use]
    pub fn pool_connection_timeout(&self) -> Duration {
        Duration::from_secs(
            self.pool_connection_timeout_secs
                .unwrap_or(DEFAULT_POOL_CONNECTION_TIMEOUT_SECS),
        )
    }

    /// Build a pool configuration for the given database URL.
    #[must_use]
    pub fn pool_config(&self, database_url: &str) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.pool_max_size())
            .with_min_idle(Some(self.pool_min_idle()))
            .with_connection_timeout(self.pool_connection_timeout())
    }
}
