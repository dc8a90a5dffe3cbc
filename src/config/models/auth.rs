//! Authentication configuration

use crate::utils::crypto::generate_jwt_secret;
use serde::{Deserialize, Serialize};

/// Authentication configuration
///
/// Constructed once at startup and handed to the authentication middleware
/// through the application state; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// Name of the request header carrying the token
    #[serde(default = "default_token_header")]
    pub token_header: String,
    /// Request paths exempt from token verification (exact match)
    #[serde(default = "default_exempt_paths")]
    pub exempt_paths: Vec<String>,
    /// Lifetime of password reset tokens in seconds
    #[serde(default = "default_reset_token_expiration")]
    pub reset_token_expiration: u64,
    /// Base URL for password reset links sent to users
    #[serde(default = "default_reset_link_base")]
    pub reset_link_base: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
            token_header: default_token_header(),
            exempt_paths: default_exempt_paths(),
            reset_token_expiration: default_reset_token_expiration(),
            reset_link_base: default_reset_link_base(),
        }
    }
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long for security".to_string());
        }

        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err(
                "JWT secret must not use default values. Please generate a secure random secret."
                    .to_string(),
            );
        }

        if self.jwt_secret.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(
                "JWT secret should contain mixed case letters, numbers, and special characters"
                    .to_string(),
            );
        }

        if self.jwt_expiration < 300 {
            return Err("JWT expiration should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.jwt_expiration > 86400 * 30 {
            return Err("JWT expiration should not exceed 30 days for security reasons".to_string());
        }

        if self.token_header.is_empty() {
            return Err("Token header name cannot be empty".to_string());
        }

        if self.exempt_paths.iter().any(|p| !p.starts_with('/')) {
            return Err("Exempt paths must start with '/'".to_string());
        }

        Ok(())
    }
}

fn default_jwt_expiration() -> u64 {
    // Tokens issued at login are valid for 24 hours
    86400
}

fn default_token_header() -> String {
    "token".to_string()
}

fn default_exempt_paths() -> Vec<String> {
    [
        "/swagger/",
        "/admin/",
        "/api/login",
        "/api/create-account",
        "/api/forgot-password",
        "/api/reset-password",
        "/health",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_reset_token_expiration() -> u64 {
    // Reset tokens are valid for 1 hour
    3600
}

fn default_reset_link_base() -> String {
    "http://localhost:3000/reset-password".to_string()
}
