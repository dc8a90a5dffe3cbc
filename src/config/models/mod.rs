//! Configuration model types

pub mod app;
pub mod auth;
pub mod server;
pub mod storage;

pub use app::AppConfig;
pub use auth::AuthConfig;
pub use server::{CorsConfig, ServerConfig};
pub use storage::{DatabaseConfig, StorageConfig};
