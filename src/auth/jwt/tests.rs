//! JWT handler tests

use super::types::{Claims, JwtHandler, TokenError};
use crate::config::AuthConfig;
use jsonwebtoken::{EncodingKey, Header, encode};

fn test_config(secret: &str) -> AuthConfig {
    AuthConfig {
        jwt_secret: secret.to_string(),
        ..Default::default()
    }
}

fn handler(secret: &str) -> JwtHandler {
    JwtHandler::new(&test_config(secret))
}

/// Encode claims directly, bypassing the handler, to craft tokens the
/// issuer would never produce (expired, foreign secret).
fn raw_token(secret: &str, user_id: i64, exp: i64) -> String {
    encode(
        &Header::default(),
        &Claims { user_id, exp },
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_issue_and_verify_roundtrip() {
    let handler = handler("Test-Secret-That-Is-At-Least-32-Chars1");

    let token = handler.issue(7).unwrap();
    assert!(!token.is_empty());

    let claims = handler.verify(&token).unwrap();
    assert_eq!(claims.user_id, 7);
    assert!(claims.exp > chrono::Utc::now().timestamp());
}

#[test]
fn test_expiry_is_24_hours() {
    let handler = handler("Test-Secret-That-Is-At-Least-32-Chars1");

    let before = chrono::Utc::now().timestamp();
    let token = handler.issue(1).unwrap();
    let claims = handler.verify(&token).unwrap();

    // Default configuration issues 24-hour tokens
    let lifetime = claims.exp - before;
    assert!((86398..=86402).contains(&lifetime));
}

#[test]
fn test_garbage_token_rejected() {
    let handler = handler("Test-Secret-That-Is-At-Least-32-Chars1");

    assert_eq!(
        handler.verify("not.a.token").unwrap_err(),
        TokenError::Malformed
    );
    assert_eq!(handler.verify("").unwrap_err(), TokenError::Malformed);
}

#[test]
fn test_foreign_secret_rejected() {
    let ours = handler("Test-Secret-That-Is-At-Least-32-Chars1");

    let foreign = raw_token(
        "Different-Secret-Also-32-Characters-X1",
        7,
        chrono::Utc::now().timestamp() + 3600,
    );

    assert_eq!(ours.verify(&foreign).unwrap_err(), TokenError::Malformed);
}

#[test]
fn test_expired_token_distinguished_from_invalid() {
    let secret = "Test-Secret-That-Is-At-Least-32-Chars1";
    let handler = handler(secret);

    // Correctly signed but two hours past expiry
    let expired = raw_token(secret, 7, chrono::Utc::now().timestamp() - 7200);

    assert_eq!(handler.verify(&expired).unwrap_err(), TokenError::Expired);
}

#[test]
fn test_tampered_token_rejected() {
    let handler = handler("Test-Secret-That-Is-At-Least-32-Chars1");

    let token = handler.issue(7).unwrap();
    let mut tampered = token.clone();
    tampered.pop();

    assert_eq!(handler.verify(&tampered).unwrap_err(), TokenError::Malformed);
}
