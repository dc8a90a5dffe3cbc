//! Request and response models for account endpoints

use crate::core::models::User;
use serde::{Deserialize, Serialize};

/// Account creation request
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Forgot password request
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Reset password request
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User info without sensitive data
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub user_id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_conversion() {
        let user = User {
            id: 7,
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            reset_token: None,
            reset_token_expiry: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let info = UserInfo::from(user);
        assert_eq!(info.user_id, 7);
        assert_eq!(info.username, "testuser");

        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
