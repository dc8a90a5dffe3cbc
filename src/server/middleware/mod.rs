//! HTTP middleware implementations
//!
//! This module provides the request-authentication middleware and its
//! helpers. Every inbound request resolves to exactly one of: a pre-flight
//! short-circuit, an allow-listed pass-through, a forward with the verified
//! identity attached, or a 401 rejection.

mod auth;
mod helpers;


pub use auth::{
    AuthDecision, AuthMiddleware, AuthMiddlewareService, AuthRejection, authenticated_identity,
    decide,
};
pub use helpers::{extract_token, is_exempt_path};
