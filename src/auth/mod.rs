//! Authentication system
//!
//! Account creation, login, and the password reset flow. Token issuing and
//! verification live in the [`jwt`] submodule; the HTTP middleware consuming
//! them lives in `server::middleware`.

pub mod jwt;

use crate::config::AuthConfig;
use crate::core::models::User;
use crate::storage::StorageLayer;
use crate::utils::crypto::{generate_token, hash_password, verify_password};
use crate::utils::error::{AppError, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Length of generated password reset tokens
const RESET_TOKEN_LENGTH: usize = 64;

/// Main authentication service
#[derive(Clone)]
pub struct AuthService {
    /// Authentication configuration
    config: Arc<AuthConfig>,
    /// Storage layer for user data
    storage: Arc<StorageLayer>,
    /// JWT handler
    jwt: Arc<jwt::JwtHandler>,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(config: &AuthConfig, storage: Arc<StorageLayer>) -> Self {
        info!("Initializing authentication service");

        let jwt = Arc::new(jwt::JwtHandler::new(config));

        Self {
            config: Arc::new(config.clone()),
            storage,
            jwt,
        }
    }

    /// Get the JWT handler
    pub fn jwt(&self) -> &jwt::JwtHandler {
        &self.jwt
    }

    /// Get the authentication configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Create a new user account
    pub async fn create_account(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User> {
        info!("Creating account: {}", username);

        if self
            .storage
            .db()
            .find_user_by_username(username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username already exists"));
        }

        if self.storage.db().find_user_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Email already exists"));
        }

        let password_hash = hash_password(password)?;

        self.storage
            .db()
            .create_user(username, email, &password_hash)
            .await
    }

    /// Authenticate a user and issue a token
    pub async fn login(&self, username: &str, password: &str) -> Result<(User, String)> {
        info!("Login attempt: {}", username);

        let user = self
            .storage
            .db()
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| AppError::auth("Invalid credentials"))?;

        if !verify_password(password, &user.password_hash)? {
            warn!("Invalid password for user: {}", username);
            return Err(AppError::auth("Invalid credentials"));
        }

        let token = self.jwt.issue(user.id)?;

        info!("User logged in successfully: {}", username);
        Ok((user, token))
    }

    /// Load the account behind an authenticated identity
    pub async fn current_user(&self, user_id: i64) -> Result<User> {
        self.storage
            .db()
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Start a password reset: generate a token, store it on the user row,
    /// and return the user together with the token for delivery
    pub async fn request_password_reset(&self, email: &str) -> Result<(User, String)> {
        info!("Password reset requested for email: {}", email);

        let user = self
            .storage
            .db()
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("Email not found"))?;

        let reset_token = generate_token(RESET_TOKEN_LENGTH);
        let expires_at = chrono::Utc::now()
            + chrono::Duration::seconds(self.config.reset_token_expiration as i64);

        self.storage
            .db()
            .store_reset_token(user.id, &reset_token, expires_at)
            .await?;

        info!("Password reset token generated for user: {}", user.id);
        Ok((user, reset_token))
    }

    /// Complete a password reset using a previously issued token.
    ///
    /// The stored token is left in place after a successful reset, matching
    /// the behavior of the system this replaces; within its expiry window it
    /// could be replayed.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        info!("Resetting password with token");

        let user = self
            .storage
            .db()
            .find_user_by_reset_token(token)
            .await?
            .ok_or_else(|| AppError::auth("Invalid or expired reset token"))?;

        let expiry = user
            .reset_token_expiry
            .ok_or_else(|| AppError::auth("Invalid or expired reset token"))?;

        if expiry <= chrono::Utc::now() {
            warn!("Expired reset token used for user: {}", user.id);
            return Err(AppError::auth("Invalid or expired reset token"));
        }

        let password_hash = hash_password(new_password)?;

        self.storage
            .db()
            .update_user_password(user.id, &password_hash)
            .await?;

        info!("Password reset successfully for user: {}", user.id);
        Ok(())
    }
}
