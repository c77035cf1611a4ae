//! HTTP Server Configuration
//!
//! Host, port, CORS origins, and the name of the backing table.

use serde::{Deserialize, Serialize};

use crate::observability::Logger;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (empty = allow any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Name of the backing table (default: "events")
    #[serde(default = "default_table_name")]
    pub table_name: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_table_name() -> String {
    "events".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            table_name: default_table_name(),
        }
    }
}

impl HttpServerConfig {
    /// Defaults overridden by `EVENTDESK_HOST`, `EVENTDESK_PORT`, and
    /// `EVENTS_TABLE_NAME`, when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("EVENTDESK_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("EVENTDESK_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => Logger::warn("CONFIG_BAD_PORT", &[("value", &port)]),
            }
        }
        if let Ok(table_name) = std::env::var("EVENTS_TABLE_NAME") {
            config.table_name = table_name;
        }

        config
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.table_name, "events");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig {
            port: 3000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_deserialization_fills_defaults() {
        let config: HttpServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.table_name, "events");
        assert_eq!(config.port, 8080);
    }
}
