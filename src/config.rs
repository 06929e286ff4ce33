//! Layered runtime configuration.
//!
//! Built-in defaults are overlaid with `TODOLIST__<SECTION>__<KEY>`
//! environment variables, for example `TODOLIST__SERVER__PORT=8080` or
//! `TODOLIST__DATABASE__URL=postgres://...`.

use config::{Config, ConfigError, Environment};
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "TODOLIST";

/// Top-level settings for the service.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// HTTP listener settings.
    pub server: ServerSettings,
    /// Storage settings.
    pub database: DatabaseSettings,
    /// Log output settings.
    pub logging: LoggingSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl ServerSettings {
    /// Returns the `host:port` pair to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage settings.
///
/// Without a URL the service keeps items in process memory.
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// `PostgreSQL` connection URL.
    pub url: Option<SecretString>,
    /// Maximum number of pooled connections.
    pub pool_size: u32,
    /// Seconds to wait for a pooled connection.
    pub connection_timeout_secs: u64,
}

impl DatabaseSettings {
    /// Returns the pool checkout timeout.
    #[must_use]
    pub const fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Settings {
    /// Loads settings from defaults and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable cannot be parsed into its
    /// setting.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(environment())
    }

    /// Loads settings from defaults overlaid with the given source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value cannot be parsed into its
    /// setting.
    pub fn from_environment(source: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.pool_size", 4)?
            .set_default("database.connection_timeout_secs", 5)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

/// Returns the environment source with the service prefix and separators.
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
