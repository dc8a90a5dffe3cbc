//! Configuration management for the backend
//!
//! This module handles loading and validation of all service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{AppError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the backend
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Application configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;

        let app: AppConfig = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { app }.with_env_overrides();
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self::default().with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of the loaded values
    fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.app.storage.database.url = url;
        }
        if let Ok(secret) = std::env::var("STOCKROOM_JWT_SECRET") {
            self.app.auth.jwt_secret = secret;
        }
        if let Ok(host) = std::env::var("STOCKROOM_HOST") {
            self.app.server.host = host;
        }
        if let Ok(port) = std::env::var("STOCKROOM_PORT") {
            if let Ok(port) = port.parse() {
                self.app.server.port = port;
            }
        }
        self
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.app.auth
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.app.storage
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.app
            .server
            .validate()
            .map_err(|e| AppError::Config(format!("Server config error: {}", e)))?;

        self.app
            .auth
            .validate()
            .map_err(|e| AppError::Config(format!("Auth config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
server:
  host: "127.0.0.1"
  port: 8000

auth:
  jwt_secret: "Test-Secret-That-Is-At-Least-32-Characters-Long1"

storage:
  database:
    url: "sqlite://stockroom-test.db?mode=rwc"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.server().host, "127.0.0.1");
        assert_eq!(config.server().port, 8000);
        assert_eq!(config.auth().token_header, "token");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_config_rejects_short_secret() {
        let config_content = r#"
auth:
  jwt_secret: "short"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        assert!(Config::from_file(temp_file.path()).await.is_err());
    }
}
