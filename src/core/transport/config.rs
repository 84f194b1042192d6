//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// How the router exposes the routes it built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Print the route listing and exit.
    Print(PrintConfig),

    /// Serve the routes over HTTP.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Rendering of the route listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintFormat {
    /// `VERB<TAB>action<TAB>path` lines grouped per resource.
    #[default]
    Text,
    /// Resources and their routes as JSON.
    Json,
}

/// Print transport configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrintConfig {
    #[serde(default)]
    pub format: PrintFormat,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    false
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::Print(PrintConfig::default())
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl PrintFormat {
    fn from_env_value(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

impl TransportConfig {
    /// Create a print transport config.
    pub fn print(format: PrintFormat) -> Self {
        Self::Print(PrintConfig { format })
    }

    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let transport = std::env::var("ROUTER_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "http")]
            "http" => {
                let port = std::env::var("ROUTER_HTTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080);
                let host = std::env::var("ROUTER_HTTP_HOST").unwrap_or_else(|_| default_host());
                let enable_cors = std::env::var("ROUTER_HTTP_CORS")
                    .map(|v| v.to_lowercase() == "true" || v == "1")
                    .unwrap_or_else(|_| default_cors());
                Self::Http(HttpConfig {
                    port,
                    host,
                    enable_cors,
                })
            }
            _ => {
                let format = std::env::var("ROUTER_PRINT_FORMAT")
                    .map(|v| PrintFormat::from_env_value(&v))
                    .unwrap_or_default();
                Self::print(format)
            }
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Print(cfg) => format!("route listing ({:?})", cfg.format),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}", cfg.host, cfg.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_text_listing() {
        let config = TransportConfig::default();
        assert!(matches!(
            config,
            TransportConfig::Print(PrintConfig { format: PrintFormat::Text })
        ));
    }

    #[test]
    fn test_print_format_parsing() {
        assert_eq!(PrintFormat::from_env_value("JSON"), PrintFormat::Json);
        assert_eq!(PrintFormat::from_env_value("text"), PrintFormat::Text);
        assert_eq!(PrintFormat::from_env_value("yaml"), PrintFormat::Text);
    }

    #[test]
    fn test_deserialize_tagged() {
        let config: TransportConfig =
            serde_json::from_str(r#"{ "type": "print", "format": "json" }"#).unwrap();
        assert!(matches!(
            config,
            TransportConfig::Print(PrintConfig { format: PrintFormat::Json })
        ));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_description() {
        let config = TransportConfig::http(9000, "0.0.0.0");
        assert_eq!(config.description(), "HTTP on 0.0.0.0:9000");
    }
}
