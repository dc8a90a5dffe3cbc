//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::auth::AuthService;
use crate::config::Config;
use crate::services::ResetNotifier;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// This struct contains shared resources that need to be accessed across
/// multiple request handlers. All fields are wrapped in Arc for efficient
/// sharing across threads.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication service
    pub auth: Arc<AuthService>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Password reset delivery
    pub notifier: Arc<dyn ResetNotifier>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        auth: AuthService,
        storage: Arc<StorageLayer>,
        notifier: Arc<dyn ResetNotifier>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            storage,
            notifier,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
