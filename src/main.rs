//! Stockroom - inventory management backend
//!
//! Async HTTP service exposing the inventory and account APIs

#![allow(missing_docs)]

use std::process::ExitCode;
use stockroom::server;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    // Pick up local overrides (DATABASE_URL, STOCKROOM_JWT_SECRET, ...)
    dotenvy::dotenv().ok();

    // Initialize logging system
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    // Start server (auto-loads config/stockroom.yaml)
    match server::builder::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
