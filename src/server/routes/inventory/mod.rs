//! Inventory endpoints
//!
//! Categories, tags, and per-user items. All routes here sit behind the
//! authentication middleware; item listings are additionally scoped to the
//! caller's user ID.

mod categories;
mod items;
mod models;
mod tags;

pub use categories::{create_category, get_categories};
pub use items::{create_item, get_items};
pub use models::{
    CategoryResponse, CreateCategoryRequest, CreateItemRequest, CreateTagRequest, ItemResponse,
    ListItemsQuery, TagResponse,
};
pub use tags::{create_tag, get_tags};

use actix_web::web;

/// Configure inventory routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/inventory")
            .route("/create-category", web::post().to(create_category))
            .route("/category", web::get().to(get_categories))
            .route("/create-tag", web::post().to(create_tag))
            .route("/tags", web::get().to(get_tags))
            .route("/create-item", web::post().to(create_item))
            .route("/list", web::get().to(get_items)),
    );
}
