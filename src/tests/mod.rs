//! Test suite for the Example API
//!
//! Covers:
//! - Unit tests for configuration and error mapping
//! - Integration tests driving the full warp filter chain
//!
//! Rule-level tests live next to the validation registry itself.

pub mod unit;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            // Initialize tracing for tests
            tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .init();
        });
    }

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();

        config.server.port = 0; // Use random port
        config.server.bind_address = "127.0.0.1".parse().unwrap();
        config.server.enable_request_logging = false;

        config
    }
}
