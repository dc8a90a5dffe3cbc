//! Tag endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::validation::DataValidator;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::{error, info};

use super::models::{CreateTagRequest, TagResponse};

/// Create a new tag
pub async fn create_tag(
    state: web::Data<AppState>,
    request: web::Json<CreateTagRequest>,
) -> ActixResult<HttpResponse> {
    info!("Creating tag: {}", request.name);

    if let Err(e) = DataValidator::validate_name(&request.name) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
    }

    if request.img.trim().is_empty() {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::<()>::error("Tag image cannot be empty"))
        );
    }

    match state
        .storage
        .db()
        .create_tag(&request.name, &request.img)
        .await
    {
        Ok(tag) => Ok(HttpResponse::Ok().json(ApiResponse::success(TagResponse::from(tag)))),
        Err(e) => {
            error!("Failed to create tag: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Unable to create tag")))
        }
    }
}

/// List all tags
pub async fn get_tags(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.storage.db().list_tags().await {
        Ok(tags) => {
            let tags: Vec<TagResponse> = tags.into_iter().map(Into::into).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(tags)))
        }
        Err(e) => {
            error!("Failed to list tags: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Unable to get tags")))
        }
    }
}
