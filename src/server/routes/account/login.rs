//! User login endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::AppError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::{error, info, warn};

use super::models::{LoginRequest, LoginResponse, UserInfo};

/// User login endpoint
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    info!("User login attempt: {}", request.username);

    match state.auth.login(&request.username, &request.password).await {
        Ok((user, token)) => {
            let response = LoginResponse {
                token,
                user: UserInfo::from(user),
            };

            Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
        }
        Err(AppError::Auth(_)) => {
            warn!("Login failed for user: {}", request.username);
            Ok(HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Invalid credentials")))
        }
        Err(e) => {
            error!("Error during login: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Something went wrong")))
        }
    }
}
