//! Category endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::validation::DataValidator;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::{error, info};

use super::models::{CategoryResponse, CreateCategoryRequest};

/// Create a new category
pub async fn create_category(
    state: web::Data<AppState>,
    request: web::Json<CreateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    info!("Creating category: {}", request.name);

    if let Err(e) = DataValidator::validate_name(&request.name) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
    }

    match state.storage.db().create_category(&request.name).await {
        Ok(category) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(CategoryResponse::from(category))))
        }
        Err(e) => {
            error!("Failed to create category: {}", e);
            Ok(HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Unable to create category")))
        }
    }
}

/// List all categories
pub async fn get_categories(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.storage.db().list_categories().await {
        Ok(categories) => {
            let categories: Vec<CategoryResponse> =
                categories.into_iter().map(Into::into).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(categories)))
        }
        Err(e) => {
            error!("Failed to list categories: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Unable to get category")))
        }
    }
}
