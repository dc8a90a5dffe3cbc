//! Item endpoints

use crate::core::models::{ItemDetails, ItemFilter, NewItem};
use crate::server::middleware::authenticated_identity;
use crate::server::routes::{ApiResponse, PaginatedResponse};
use crate::server::state::AppState;
use crate::utils::validation::DataValidator;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::{error, info};

use super::models::{CreateItemRequest, ItemResponse, ListItemsQuery};

/// Create a new item owned by the authenticated user
pub async fn create_item(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<CreateItemRequest>,
) -> ActixResult<HttpResponse> {
    let identity = match authenticated_identity(&req) {
        Some(identity) => identity,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Unauthorized"))
            );
        }
    };

    info!(
        "Creating item {} ({}) for user {}",
        request.name, request.sku, identity.user_id
    );

    // Validate input
    for check in [
        DataValidator::validate_sku(&request.sku),
        DataValidator::validate_name(&request.name),
        DataValidator::validate_stock("in_stock", request.in_stock),
        DataValidator::validate_stock("available_stock", request.available_stock),
    ] {
        if let Err(e) = check {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
        }
    }

    // The referenced category and tags must exist
    let category = match state.storage.db().find_category_by_id(request.category).await {
        Ok(Some(category)) => category,
        Ok(None) => {
            return Ok(
                HttpResponse::BadRequest().json(ApiResponse::<()>::error("Unknown category"))
            );
        }
        Err(e) => {
            error!("Failed to look up category: {}", e);
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Unable to create item")));
        }
    };

    let tags = match state.storage.db().find_tags_by_ids(&request.tags).await {
        Ok(tags) if tags.len() == request.tags.len() => tags,
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Unknown tag")));
        }
        Err(e) => {
            error!("Failed to look up tags: {}", e);
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Unable to create item")));
        }
    };

    let new_item = NewItem {
        sku: request.sku.clone(),
        name: request.name.clone(),
        category_id: category.id,
        tag_ids: request.tags.clone(),
        in_stock: request.in_stock,
        available_stock: request.available_stock,
        user_id: identity.user_id,
    };

    match state.storage.db().create_item(&new_item).await {
        Ok(item) => {
            let details = ItemDetails {
                item,
                category,
                tags,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(ItemResponse::from(details))))
        }
        Err(e) => {
            error!("Failed to create item: {}", e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Unable to create item")))
        }
    }
}

/// List the authenticated user's items.
///
/// Results are always filtered to rows owned by the caller; search and date
/// range filters narrow them further.
pub async fn get_items(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListItemsQuery>,
) -> ActixResult<HttpResponse> {
    let identity = match authenticated_identity(&req) {
        Some(identity) => identity,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Unauthorized"))
            );
        }
    };

    if let Err(e) = query.pagination().validate() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e)));
    }

    let filter = ItemFilter {
        search: query.search.clone(),
        start_date: query.start_date,
        end_date: query.end_date,
    };

    match state
        .storage
        .db()
        .list_items(identity.user_id, &filter, query.page, query.limit)
        .await
    {
        Ok((items, total)) => {
            let items: Vec<ItemResponse> = items.into_iter().map(Into::into).collect();
            let response = PaginatedResponse::new(items, query.page, query.limit, total);
            Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
        }
        Err(e) => {
            error!("Failed to list items for user {}: {}", identity.user_id, e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Unable to get items")))
        }
    }
}
