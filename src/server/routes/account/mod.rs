//! Account endpoints
//!
//! Registration, login, auth check, and the password reset flow.

mod login;
mod models;
mod password;
mod register;
mod user;

pub use login::login;
pub use models::{
    CreateAccountRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
    ResetPasswordRequest, UserInfo,
};
pub use password::{forgot_password, reset_password};
pub use register::create_account;
pub use user::check_auth;

use actix_web::web;

/// Configure account routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/login", web::post().to(login))
            .route("/create-account", web::post().to(create_account))
            .route("/check-auth", web::get().to(check_auth))
            .route("/forgot-password", web::post().to(forgot_password))
            .route("/reset-password", web::post().to(reset_password)),
    );
}
