//! Request input validation
//!
//! Validators for account and inventory fields. All failures map to
//! `AppError::Validation` so handlers can return them as 400 responses.

use crate::utils::error::{AppError, Result};
use regex::Regex;

/// Validator for request payload fields
pub struct DataValidator;

impl DataValidator {
    /// Validate a username
    pub fn validate_username(username: &str) -> Result<()> {
        if username.trim().is_empty() {
            return Err(AppError::Validation(
                "Username cannot be empty".to_string(),
            ));
        }

        if username.len() < 3 {
            return Err(AppError::Validation(
                "Username must be at least 3 characters".to_string(),
            ));
        }

        if username.len() > 50 {
            return Err(AppError::Validation(
                "Username cannot exceed 50 characters".to_string(),
            ));
        }

        let username_regex = Regex::new(r"^[a-zA-Z0-9_-]+$")
            .map_err(|e| AppError::Internal(format!("Regex error: {}", e)))?;

        if !username_regex.is_match(username) {
            return Err(AppError::Validation(
                "Username can only contain letters, numbers, underscores, and hyphens".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate an email address
    pub fn validate_email(email: &str) -> Result<()> {
        if email.trim().is_empty() {
            return Err(AppError::Validation("Email cannot be empty".to_string()));
        }

        if email.len() > 254 {
            return Err(AppError::Validation(
                "Email cannot exceed 254 characters".to_string(),
            ));
        }

        let email_regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .map_err(|e| AppError::Internal(format!("Regex error: {}", e)))?;

        if !email_regex.is_match(email) {
            return Err(AppError::Validation(
                "Email address is not valid".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate password strength
    pub fn validate_password(password: &str) -> Result<()> {
        if password.len() < 8 {
            return Err(AppError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        if password.len() > 128 {
            return Err(AppError::Validation(
                "Password cannot exceed 128 characters".to_string(),
            ));
        }

        let has_lowercase = password.chars().any(|c| c.is_lowercase());
        let has_uppercase = password.chars().any(|c| c.is_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password
            .chars()
            .any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c));

        let strength_count = [has_lowercase, has_uppercase, has_digit, has_special]
            .iter()
            .filter(|&&x| x)
            .count();

        if strength_count < 3 {
            return Err(AppError::Validation(
                "Password must contain at least three of: lowercase, uppercase, digits, special characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate an item SKU
    pub fn validate_sku(sku: &str) -> Result<()> {
        if sku.trim().is_empty() {
            return Err(AppError::Validation("SKU cannot be empty".to_string()));
        }

        if sku.len() > 100 {
            return Err(AppError::Validation(
                "SKU cannot exceed 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a display name (item, category, or tag)
    pub fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name cannot be empty".to_string()));
        }

        if name.len() > 100 {
            return Err(AppError::Validation(
                "Name cannot exceed 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a stock count
    pub fn validate_stock(field: &str, value: i32) -> Result<()> {
        if value < 0 {
            return Err(AppError::Validation(format!(
                "{} must be a non-negative value",
                field
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(DataValidator::validate_username("valid_user").is_ok());
        assert!(DataValidator::validate_username("user123").is_ok());
        assert!(DataValidator::validate_username("").is_err());
        assert!(DataValidator::validate_username("ab").is_err());
        assert!(DataValidator::validate_username("invalid@user").is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(DataValidator::validate_email("user@example.com").is_ok());
        assert!(DataValidator::validate_email("a.b+c@sub.domain.org").is_ok());
        assert!(DataValidator::validate_email("").is_err());
        assert!(DataValidator::validate_email("not-an-email").is_err());
        assert!(DataValidator::validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_password_validation() {
        assert!(DataValidator::validate_password("StrongPass123!").is_ok());
        // Has 3 types: upper, lower, digit
        assert!(DataValidator::validate_password("NoSpecialChars123").is_ok());
        // Too short
        assert!(DataValidator::validate_password("weak").is_err());
        // Only 1 type
        assert!(DataValidator::validate_password("onlylowercase").is_err());
        // Only 2 types: upper, lower
        assert!(DataValidator::validate_password("OnlyTwoTypes").is_err());
    }

    #[test]
    fn test_sku_validation() {
        assert!(DataValidator::validate_sku("ETSY-FOREST").is_ok());
        assert!(DataValidator::validate_sku("").is_err());
        assert!(DataValidator::validate_sku(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_stock_validation() {
        assert!(DataValidator::validate_stock("in_stock", 0).is_ok());
        assert!(DataValidator::validate_stock("in_stock", 100).is_ok());
        assert!(DataValidator::validate_stock("available_stock", -1).is_err());
    }
}
