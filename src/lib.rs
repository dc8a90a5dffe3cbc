//! # Stockroom
//!
//! Inventory management backend with JWT-authenticated REST APIs.
//!
//! ## Features
//!
//! - **Accounts**: registration, login, and password reset flows backed by a
//!   relational store
//! - **Token Authentication**: every request outside a small allow-list must
//!   carry a signed, time-limited token in the `token` header
//! - **Per-User Inventory**: items are owned by the account that created them
//!   and listings are always scoped to the caller
//! - **Categories and Tags**: shared lookup tables items can reference
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stockroom::Config;
//! use stockroom::server::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/stockroom.yaml").await?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{AppError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, "stockroom");
        assert!(!DESCRIPTION.is_empty());
    }
}
