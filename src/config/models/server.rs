//! Server configuration

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    pub workers: Option<usize>,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the number of workers (defaults to CPU count)
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        self.cors.validate()?;

        Ok(())
    }
}

/// CORS configuration
///
/// Values are rendered into the `Access-Control-Allow-*` headers the
/// authentication middleware attaches to pre-flight and forwarded responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins (empty means allow all)
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,
    /// Allowed headers
    #[serde(default = "default_cors_headers")]
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            allowed_methods: default_cors_methods(),
            allowed_headers: default_cors_headers(),
        }
    }
}

impl CorsConfig {
    /// Header value for `Access-Control-Allow-Origin`
    pub fn origin_value(&self) -> String {
        if self.allowed_origins.is_empty() {
            "*".to_string()
        } else {
            self.allowed_origins.join(", ")
        }
    }

    /// Header value for `Access-Control-Allow-Methods`
    pub fn methods_value(&self) -> String {
        self.allowed_methods.join(", ")
    }

    /// Header value for `Access-Control-Allow-Headers`
    pub fn headers_value(&self) -> String {
        self.allowed_headers.join(", ")
    }

    /// Validate CORS configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.allowed_methods.is_empty() {
            return Err("At least one CORS method must be allowed".to_string());
        }
        if self.allowed_headers.is_empty() {
            return Err("At least one CORS header must be allowed".to_string());
        }
        Ok(())
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_methods() -> Vec<String> {
    ["DELETE", "GET", "OPTIONS", "PATCH", "POST", "PUT"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_cors_headers() -> Vec<String> {
    ["accept", "authorization", "content-type", "user-agent", "token"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "127.0.0.1:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_config_rejects_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cors_header_values() {
        let config = CorsConfig::default();
        assert_eq!(config.origin_value(), "*");
        assert!(config.methods_value().contains("OPTIONS"));
        assert!(config.headers_value().contains("token"));
    }

    #[test]
    fn test_cors_explicit_origins() {
        let config = CorsConfig {
            allowed_origins: vec!["http://127.0.0.1:5173".to_string()],
            ..Default::default()
        };
        assert_eq!(config.origin_value(), "http://127.0.0.1:5173");
    }
}
