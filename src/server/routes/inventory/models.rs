//! Request and response models for inventory endpoints

use crate::core::models::{Category, ItemDetails, Tag};
use crate::server::routes::PaginationQuery;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category creation request
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Tag creation request
#[derive(Debug, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
    pub img: String,
}

/// Item creation request
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub sku: String,
    pub name: String,
    pub category: i64,
    #[serde(default)]
    pub tags: Vec<i64>,
    pub in_stock: i32,
    pub available_stock: i32,
}

/// Query parameters for item listings.
///
/// Pagination fields live directly on this struct because the query-string
/// deserializer cannot see through `#[serde(flatten)]` for numeric values.
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    /// Substring match against item name or SKU
    pub search: Option<String>,
    /// Start of the created-at date range
    pub start_date: Option<NaiveDate>,
    /// End of the created-at date range
    pub end_date: Option<NaiveDate>,
    /// Page number (1-based)
    #[serde(default = "crate::server::routes::default_page")]
    pub page: u64,
    /// Number of items per page
    #[serde(default = "crate::server::routes::default_limit")]
    pub limit: u64,
}

impl ListItemsQuery {
    /// View the pagination fields as a [`PaginationQuery`]
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Category response
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// Tag response
#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
    pub img: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            img: tag.img,
        }
    }
}

/// Item response with embedded category and tags
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub in_stock: i32,
    pub available_stock: i32,
    pub category: CategoryResponse,
    pub tags: Vec<TagResponse>,
}

impl From<ItemDetails> for ItemResponse {
    fn from(details: ItemDetails) -> Self {
        Self {
            id: details.item.id,
            sku: details.item.sku,
            name: details.item.name,
            in_stock: details.item.in_stock,
            available_stock: details.item.available_stock,
            category: details.category.into(),
            tags: details.tags.into_iter().map(Into::into).collect(),
        }
    }
}
