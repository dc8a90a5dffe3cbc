//! Password management endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::AppError;
use crate::utils::validation::DataValidator;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::{error, info, warn};

use super::models::{ForgotPasswordRequest, ResetPasswordRequest};

/// Forgot password endpoint
pub async fn forgot_password(
    state: web::Data<AppState>,
    request: web::Json<ForgotPasswordRequest>,
) -> ActixResult<HttpResponse> {
    info!("Password reset request for email: {}", request.email);

    match state.auth.request_password_reset(&request.email).await {
        Ok((user, reset_token)) => {
            state.notifier.send_password_reset(&user.email, &reset_token);
            Ok(HttpResponse::Ok().json(ApiResponse::success("Password reset email sent")))
        }
        Err(AppError::NotFound(_)) => {
            warn!("Password reset requested for unknown email");
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Email not found")))
        }
        Err(e) => {
            error!("Password reset request failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Something went wrong")))
        }
    }
}

/// Reset password endpoint
pub async fn reset_password(
    state: web::Data<AppState>,
    request: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    info!("Password reset with token");

    // Validate new password
    if let Err(e) = DataValidator::validate_password(&request.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
    }

    match state
        .auth
        .reset_password(&request.token, &request.password)
        .await
    {
        Ok(()) => {
            info!("Password reset successful");
            Ok(HttpResponse::Ok().json(ApiResponse::success("Password reset successful")))
        }
        Err(AppError::Auth(_)) => {
            warn!("Password reset with invalid or expired token");
            Ok(HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Invalid or expired token")))
        }
        Err(e) => {
            error!("Password reset failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Something went wrong")))
        }
    }
}
