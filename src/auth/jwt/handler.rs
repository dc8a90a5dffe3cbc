//! Core JWT handler implementation

use super::types::{Claims, JwtHandler, TokenError};
use crate::config::AuthConfig;
use crate::utils::error::{AppError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

impl JwtHandler {
    /// Create a new JWT handler from the auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration: config.jwt_expiration,
        }
    }

    /// Issue a signed token for a user
    pub fn issue(&self, user_id: i64) -> Result<String> {
        let now = chrono::Utc::now().timestamp();

        let claims = Claims {
            user_id,
            exp: now + self.expiration as i64,
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(AppError::Jwt)?;

        debug!("Issued token for user: {}", user_id);
        Ok(token)
    }

    /// Verify a token and return its claims
    ///
    /// Expiry is checked with zero leeway so a token is invalid the moment
    /// its `exp` passes.
    pub fn verify(&self, token: &str) -> std::result::Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => {
                        debug!("Token verification failed: {}", e);
                        TokenError::Malformed
                    }
                }
            })?;

        debug!("Verified token for user: {}", token_data.claims.user_id);
        Ok(token_data.claims)
    }
}
