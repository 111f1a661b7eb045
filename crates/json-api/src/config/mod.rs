//! Server configuration module

use clap::Parser;

use crate::config::{db::DatabaseConfig, observability::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Dispensary JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "dispensary-json", about = "Dispensary JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging and request tracing settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::config::observability::LogFormat;

    use super::*;

    #[test]
    fn test_parses_defaults_with_database_url() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "dispensary-json",
            "--database-url",
            "postgresql://localhost/dispensary",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:3334");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.logging.slow_request_threshold().as_millis(), 1_000);
        assert_eq!(config.logging.log_format, LogFormat::Compact);
        assert_eq!(config.server.shutdown_grace().as_secs(), 30);

        Ok(())
    }

    #[test]
    fn test_rejects_zero_max_connections() {
        let result = ServerConfig::try_parse_from([
            "dispensary-json",
            "--database-url",
            "postgresql://localhost/dispensary",
            "--db-max-connections",
            "0",
        ]);

        assert!(result.is_err(), "zero connections should be rejected");
    }
}
