//! Top-level application configuration

use super::{AuthConfig, ServerConfig, StorageConfig};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}
