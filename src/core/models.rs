//! Core data models for the backend

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated identity attached to a request after a successful token
/// check. Immutable once inserted into the request extensions; handlers that
/// need the full profile reconstruct it from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// ID of the authenticated user
    pub user_id: i64,
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// Email address (unique)
    pub email: String,
    /// Password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Outstanding password reset token, if any
    #[serde(skip_serializing)]
    pub reset_token: Option<String>,
    /// Expiry of the outstanding reset token
    #[serde(skip_serializing)]
    pub reset_token_expiry: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Item category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID
    pub id: i64,
    /// Category name
    pub name: String,
}

/// Item tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag ID
    pub id: i64,
    /// Tag name
    pub name: String,
    /// Tag image source
    pub img: String,
}

/// Inventory item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Item ID
    pub id: i64,
    /// Stock keeping unit (unique)
    pub sku: String,
    /// Item name
    pub name: String,
    /// Units currently in stock
    pub in_stock: i32,
    /// Units available for sale
    pub available_stock: i32,
    /// Owning user ID
    pub user_id: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Item together with its category and tags, as returned by listings
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetails {
    /// The item itself
    #[serde(flatten)]
    pub item: Item,
    /// Category the item belongs to
    pub category: Category,
    /// Tags associated with the item
    pub tags: Vec<Tag>,
}

/// Payload for creating a new item
#[derive(Debug, Clone)]
pub struct NewItem {
    /// Stock keeping unit
    pub sku: String,
    /// Item name
    pub name: String,
    /// Category the item belongs to
    pub category_id: i64,
    /// Tags to associate with the item
    pub tag_ids: Vec<i64>,
    /// Units currently in stock
    pub in_stock: i32,
    /// Units available for sale
    pub available_stock: i32,
    /// Owning user ID
    pub user_id: i64,
}

/// Filters for item listings
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Substring match against item name or SKU
    pub search: Option<String>,
    /// Start of the created-at date range (inclusive)
    pub start_date: Option<NaiveDate>,
    /// End of the created-at date range (inclusive)
    pub end_date: Option<NaiveDate>,
}

impl ItemFilter {
    /// Created-at bounds as UTC timestamps, present only when both ends of
    /// the range were supplied
    pub fn date_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => {
                let start = start.and_hms_opt(0, 0, 0)?.and_utc();
                let end = end.and_hms_opt(23, 59, 59)?.and_utc();
                Some((start, end))
            }
            _ => None,
        }
    }
}
