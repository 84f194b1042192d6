//! Configuration management for the router.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Where controllers are found.
    pub routing: RoutingConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name reported in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for controller discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Application root. The default controllers directory is
    /// `<app_root>/controllers`.
    pub app_root: PathBuf,

    /// Explicit controllers directory, overriding the default.
    pub controllers_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl RoutingConfig {
    pub fn controllers_dir(&self) -> Option<&Path> {
        self.controllers_dir.as_deref()
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("."),
            controllers_dir: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "resource-router".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            routing: RoutingConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `ROUTER_`.
    /// For example: `ROUTER_APP_ROOT`, `ROUTER_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("ROUTER_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("ROUTER_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("ROUTER_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        if let Ok(root) = std::env::var("ROUTER_APP_ROOT") {
            config.routing.app_root = PathBuf::from(root);
        }

        if let Ok(dir) = std::env::var("ROUTER_CONTROLLERS_DIR") {
            info!("Controllers directory set to {}", dir);
            config.routing.controllers_dir = Some(PathBuf::from(dir));
        }

        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_routing_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ROUTER_APP_ROOT", "/srv/app");
            std::env::set_var("ROUTER_CONTROLLERS_DIR", "/srv/app/api");
        }
        let config = Config::from_env();
        assert_eq!(config.routing.app_root, PathBuf::from("/srv/app"));
        assert_eq!(
            config.routing.controllers_dir(),
            Some(Path::new("/srv/app/api"))
        );
        unsafe {
            std::env::remove_var("ROUTER_APP_ROOT");
            std::env::remove_var("ROUTER_CONTROLLERS_DIR");
        }
    }

    #[test]
    fn test_routing_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("ROUTER_APP_ROOT");
            std::env::remove_var("ROUTER_CONTROLLERS_DIR");
        }
        let config = Config::from_env();
        assert_eq!(config.routing.app_root, PathBuf::from("."));
        assert_eq!(config.routing.controllers_dir(), None);
    }

    #[test]
    fn test_log_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ROUTER_LOG_LEVEL", "debug");
        }
        let config = Config::from_env();
        assert_eq!(config.logging.level, "debug");
        unsafe {
            std::env::remove_var("ROUTER_LOG_LEVEL");
        }
    }

    #[test]
    fn test_config_serializes() {
        let value = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(value["server"]["name"], "resource-router");
        assert_eq!(value["transport"]["type"], "print");
    }
}
