//! Cryptographic utilities
//!
//! Password hashing and random token generation.

pub mod keys;
pub mod password;

pub use keys::{generate_jwt_secret, generate_token};
pub use password::{hash_password, verify_password};
