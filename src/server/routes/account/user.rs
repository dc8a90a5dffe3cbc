//! Auth check endpoint

use crate::server::middleware::authenticated_identity;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::{debug, error};

use super::models::UserInfo;

/// Auth check endpoint: reconstructs the caller's profile from the store
/// using the identity the middleware attached
pub async fn check_auth(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    debug!("Auth check request");

    let identity = match authenticated_identity(&req) {
        Some(identity) => identity,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Unauthorized"))
            );
        }
    };

    match state.auth.current_user(identity.user_id).await {
        Ok(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(UserInfo::from(user)))),
        Err(e) => {
            error!("Auth check failed for user {}: {}", identity.user_id, e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Something went wrong")))
        }
    }
}
