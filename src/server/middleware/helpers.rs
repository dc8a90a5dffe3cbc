//! Helper functions for middleware

use crate::config::CorsConfig;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};

/// Extract the authentication token from the configured request header.
///
/// An empty header value counts as no token at all.
pub fn extract_token(headers: &HeaderMap, header_name: &str) -> Option<String> {
    headers
        .get(header_name)
        .and_then(|h| h.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Check whether a request path is exempt from token verification.
///
/// Matching is exact, not prefix: `/api/login` is exempt while
/// `/api/login/extra` is not.
pub fn is_exempt_path(path: &str, exempt_paths: &[String]) -> bool {
    exempt_paths.iter().any(|exempt| exempt == path)
}

/// Add the cross-origin response headers to an outgoing response
pub fn add_cors_headers(headers: &mut HeaderMap, cors: &CorsConfig) {
    let pairs = [
        ("access-control-allow-origin", cors.origin_value()),
        ("access-control-allow-methods", cors.methods_value()),
        ("access-control-allow-headers", cors.headers_value()),
    ];

    for (name, value) in pairs {
        if let Ok(value) = HeaderValue::from_str(&value) {
            headers.insert(HeaderName::from_static(name), value);
        }
    }
}
