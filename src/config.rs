use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Server configuration
    #[validate(nested)]
    pub server: ServerConfig,

    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Server address to bind to
    pub bind_address: IpAddr,

    /// Server port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,

    /// Maximum request size in bytes
    #[validate(range(min = 1024, max = 10485760))] // 1KB to 10MB
    pub max_request_size: usize,

    /// Enable request logging
    pub enable_request_logging: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, text)
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: "127.0.0.1".parse().unwrap(),
                port: 8080,
                max_request_size: 1024 * 1024, // 1MB
                enable_request_logging: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional file, and environment variables
    pub fn load() -> crate::Result<Self> {
        let defaults = config::Config::try_from(&AppConfig::default()).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to build default configuration: {}", e))
        })?;

        let config = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name("Conf").required(false))
            .add_source(config::Environment::with_prefix("EXAMPLE_API").separator("__"))
            .build()
            .map_err(|e| {
                crate::error::AppError::Config(format!("Failed to build configuration: {}", e))
            })?;

        let config: AppConfig = config.try_deserialize().map_err(|e| {
            crate::error::AppError::Config(format!("Failed to deserialize configuration: {}", e))
        })?;

        // Validate configuration
        config.validate().map_err(|e| {
            crate::error::AppError::Validation(format!("Configuration validation failed: {}", e))
        })?;

        Ok(config)
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}
