//! Authentication middleware
//!
//! Intercepts every inbound request and decides, in a fixed order, whether
//! it is a cross-origin pre-flight, an allow-listed path, a request with a
//! verifiable token, or a rejection. The ordered checks live in [`decide`];
//! the middleware only maps the resulting [`AuthDecision`] onto responses.

use crate::auth::jwt::{JwtHandler, TokenError};
use crate::core::models::Identity;
use crate::server::AppState;
use crate::server::middleware::helpers::{add_cors_headers, extract_token, is_exempt_path};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::Method;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use futures::future::{Ready, ready};
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, warn};

/// Outcome of evaluating a request against the authentication rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// Cross-origin pre-flight: answer immediately, skip all other checks
    Preflight,
    /// Path is allow-listed: forward without verification
    Exempt,
    /// Token verified: forward with this identity attached
    Authorized(Identity),
    /// Reject with 401
    Rejected(AuthRejection),
}

/// Why a request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No token header on a protected path
    MissingToken,
    /// Token signature is valid but past expiry
    ExpiredToken,
    /// Token is malformed or signed with a different secret
    InvalidToken,
    /// Unexpected internal failure during verification; deliberately mapped
    /// to 401 rather than a 5xx
    AuthorizationFailed,
}

impl AuthRejection {
    /// Message returned to the caller
    pub fn message(&self) -> &'static str {
        match self {
            AuthRejection::MissingToken => "Please provide Token",
            AuthRejection::ExpiredToken => "Token has expired",
            AuthRejection::InvalidToken => "Invalid token",
            AuthRejection::AuthorizationFailed => "Authorization failed",
        }
    }

    /// Build the 401 response for this rejection
    pub fn to_response(self) -> HttpResponse {
        HttpResponse::Unauthorized().json(RejectionBody {
            code: 401,
            message: self.message(),
        })
    }
}

/// JSON body of a 401 rejection
#[derive(Debug, Serialize)]
struct RejectionBody {
    code: u16,
    message: &'static str,
}

/// Evaluate a request against the authentication rules.
///
/// The checks run in a fixed order and the first match wins: pre-flight
/// method, then allow-listed path, then token presence, then verification.
/// Reordering them would change which requests bypass authentication.
pub fn decide(
    method: &Method,
    path: &str,
    token: Option<&str>,
    exempt_paths: &[String],
    jwt: &JwtHandler,
) -> AuthDecision {
    if method == Method::OPTIONS {
        return AuthDecision::Preflight;
    }

    if is_exempt_path(path, exempt_paths) {
        return AuthDecision::Exempt;
    }

    let token = match token {
        Some(token) => token,
        None => return AuthDecision::Rejected(AuthRejection::MissingToken),
    };

    match jwt.verify(token) {
        Ok(claims) => AuthDecision::Authorized(Identity {
            user_id: claims.user_id,
        }),
        Err(TokenError::Expired) => AuthDecision::Rejected(AuthRejection::ExpiredToken),
        Err(TokenError::Malformed) => AuthDecision::Rejected(AuthRejection::InvalidToken),
    }
}

/// Read the verified identity attached by the middleware.
///
/// Returns `None` only when the middleware did not run for this request;
/// handlers registered behind it can rely on the identity being present.
pub fn authenticated_identity(req: &HttpRequest) -> Option<Identity> {
    req.extensions().get::<Identity>().copied()
}

/// Auth middleware for Actix-web
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();

        // Fail closed when the application state is unavailable: the
        // contract is a 401, never a 5xx
        let state = match state {
            Some(state) => state,
            None => {
                warn!("Application state missing during authentication");
                let res = AuthRejection::AuthorizationFailed.to_response();
                return Box::pin(ready(Ok(req.into_response(res))));
            }
        };

        let auth_config = &state.config.app.auth;
        let cors = state.config.app.server.cors.clone();
        let token = extract_token(req.headers(), &auth_config.token_header);

        let decision = decide(
            req.method(),
            req.path(),
            token.as_deref(),
            &auth_config.exempt_paths,
            state.auth.jwt(),
        );

        match decision {
            AuthDecision::Preflight => {
                debug!("Answering cross-origin pre-flight for {}", req.path());
                let mut res = HttpResponse::Ok().finish();
                add_cors_headers(res.headers_mut(), &cors);
                Box::pin(ready(Ok(req.into_response(res))))
            }
            AuthDecision::Rejected(rejection) => {
                warn!(
                    "Rejected request to {}: {}",
                    req.path(),
                    rejection.message()
                );
                Box::pin(ready(Ok(req.into_response(rejection.to_response()))))
            }
            AuthDecision::Exempt => {
                debug!("Path {} is exempt from authentication", req.path());
                let fut = self.service.call(req);
                Box::pin(async move {
                    let mut res = fut.await?.map_into_boxed_body();
                    add_cors_headers(res.headers_mut(), &cors);
                    Ok(res)
                })
            }
            AuthDecision::Authorized(identity) => {
                debug!("Authenticated user {} for {}", identity.user_id, req.path());
                req.extensions_mut().insert(identity);
                let fut = self.service.call(req);
                Box::pin(async move {
                    let mut res = fut.await?.map_into_boxed_body();
                    add_cors_headers(res.headers_mut(), &cors);
                    Ok(res)
                })
            }
        }
    }
}
