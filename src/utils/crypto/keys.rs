//! Random token generation utilities

use rand::{Rng, distributions::Alphanumeric};

/// Generate a secure random token of the given length
pub fn generate_token(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generate a JWT signing secret
pub fn generate_jwt_secret() -> String {
    generate_token(64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token_length() {
        let token = generate_token(16);
        assert_eq!(token.len(), 16);

        let token = generate_token(64);
        assert_eq!(token.len(), 64);
    }

    #[test]
    fn test_generate_token_alphanumeric() {
        let token = generate_token(128);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_token_unique() {
        assert_ne!(generate_token(32), generate_token(32));
    }

    #[test]
    fn test_generate_jwt_secret_length() {
        assert_eq!(generate_jwt_secret().len(), 64);
    }
}
