//! JWT token issuing and verification

mod handler;
mod types;

#[cfg(test)]
mod tests;

pub use types::{Claims, JwtHandler, TokenError};
