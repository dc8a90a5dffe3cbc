//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{AppError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| AppError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("Starting Stockroom backend");

    // Auto-load configuration file
    let config_path = "config/stockroom.yaml";
    info!("Loading configuration file: {}", config_path);

    let config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("Configuration file loaded successfully");
            config
        }
        Err(e) => {
            info!(
                "Configuration file loading failed, using default config: {}",
                e
            );
            info!("Set STOCKROOM_JWT_SECRET to keep issued tokens valid across restarts");
            Config::from_env()?
        }
    };

    // Create and start server
    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/login - Login");
    info!("   POST /api/create-account - Account creation");
    info!("   GET  /api/check-auth - Token check");
    info!("   POST /api/forgot-password - Request password reset");
    info!("   POST /api/reset-password - Complete password reset");
    info!("   POST /api/inventory/create-category - Create category");
    info!("   GET  /api/inventory/category - List categories");
    info!("   POST /api/inventory/create-tag - Create tag");
    info!("   GET  /api/inventory/tags - List tags");
    info!("   POST /api/inventory/create-item - Create item");
    info!("   GET  /api/inventory/list - List items");

    server.start().await
}
