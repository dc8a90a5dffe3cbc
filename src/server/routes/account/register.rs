//! Account creation endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::AppError;
use crate::utils::validation::DataValidator;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::{error, info};

use super::models::{CreateAccountRequest, UserInfo};

/// Account creation endpoint
pub async fn create_account(
    state: web::Data<AppState>,
    request: web::Json<CreateAccountRequest>,
) -> ActixResult<HttpResponse> {
    info!("Account creation attempt: {}", request.username);

    // Validate input
    if let Err(e) = DataValidator::validate_username(&request.username) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
    }

    if let Err(e) = DataValidator::validate_email(&request.email) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
    }

    if let Err(e) = DataValidator::validate_password(&request.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
    }

    match state
        .auth
        .create_account(&request.username, &request.email, &request.password)
        .await
    {
        Ok(user) => {
            info!("Account created successfully: {}", user.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(UserInfo::from(user))))
        }
        Err(AppError::Conflict(msg)) => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg)))
        }
        Err(e) => {
            error!("Failed to create account: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Something went wrong")))
        }
    }
}
