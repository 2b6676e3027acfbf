//! Environment-driven server configuration.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use voltbot_agent::DEFAULT_PACING;

const DEFAULT_PORT: u16 = 8000;

/// Errors raised while reading configuration from the environment.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the server listens on.
    pub port: u16,
    /// Pause between streamed reply fragments.
    pub chunk_delay: Duration,
}

impl ServerConfig {
    /// Reads configuration from the environment, falling back to defaults.
    ///
    /// `PORT` selects the listen port (default 8000). `CHUNK_DELAY_MS` sets
    /// the pause between streamed fragments in milliseconds (default 30).
    /// Unparseable values are startup errors, not runtime surprises.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        let chunk_delay = match env::var("CHUNK_DELAY_MS") {
            Ok(raw) => {
                let ms: u64 = raw
                    .parse()
                    .map_err(|_| ConfigError::Invalid { name: "CHUNK_DELAY_MS", value: raw })?;
                Duration::from_millis(ms)
            }
            Err(_) => DEFAULT_PACING,
        };

        Ok(Self { port, chunk_delay })
    }

    /// Socket address the server binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
