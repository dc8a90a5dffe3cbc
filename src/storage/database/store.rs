use crate::config::DatabaseConfig;
use crate::core::models::{Category, Item, ItemDetails, ItemFilter, NewItem, Tag, User};
use crate::utils::error::{AppError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::entities::{self, category, item, tag, user};
use super::migration::Migrator;

/// SeaORM-based database implementation
#[derive(Debug, Clone)]
pub struct Database {
    db: DatabaseConnection,
}

impl Database {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = sea_orm::Database::connect(opt)
            .await
            .map_err(AppError::Database)?;

        info!("Database connection established");
        Ok(Self { db })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            AppError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        entities::User::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(())
    }

    // ==================== Users ====================

    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: i64) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Find user by username
    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        debug!("Finding user by username: {}", username);

        let model = entities::User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Find user by password reset token
    pub async fn find_user_by_reset_token(&self, token: &str) -> Result<Option<User>> {
        debug!("Finding user by reset token");

        let model = entities::User::find()
            .filter(user::Column::ResetToken.eq(token))
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Create a new user
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User> {
        debug!("Creating user: {}", username);

        let now = chrono::Utc::now();
        let active_model = user::ActiveModel {
            id: NotSet,
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            reset_token: Set(None),
            reset_token_expiry: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::Database)?;

        Ok(model.to_domain())
    }

    /// Update user password
    pub async fn update_user_password(&self, user_id: i64, password_hash: &str) -> Result<()> {
        debug!("Updating password for user: {}", user_id);

        let mut user: user::ActiveModel = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?
            .into();

        user.password_hash = Set(password_hash.to_string());
        user.updated_at = Set(chrono::Utc::now());

        user.update(&self.db).await.map_err(AppError::Database)?;

        Ok(())
    }

    /// Store a password reset token on the user row
    pub async fn store_reset_token(
        &self,
        user_id: i64,
        token: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<()> {
        debug!("Storing password reset token for user: {}", user_id);

        let mut user: user::ActiveModel = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?
            .into();

        user.reset_token = Set(Some(token.to_string()));
        user.reset_token_expiry = Set(Some(expires_at));
        user.updated_at = Set(chrono::Utc::now());

        user.update(&self.db).await.map_err(AppError::Database)?;

        Ok(())
    }

    // ==================== Categories ====================

    /// Create a new category
    pub async fn create_category(&self, name: &str) -> Result<Category> {
        debug!("Creating category: {}", name);

        let active_model = category::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::Database)?;

        Ok(model.to_domain())
    }

    /// Find category by ID
    pub async fn find_category_by_id(&self, category_id: i64) -> Result<Option<Category>> {
        let model = entities::Category::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// List all categories
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let models = entities::Category::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    // ==================== Tags ====================

    /// Create a new tag
    pub async fn create_tag(&self, name: &str, img: &str) -> Result<Tag> {
        debug!("Creating tag: {}", name);

        let active_model = tag::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            img: Set(img.to_string()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::Database)?;

        Ok(model.to_domain())
    }

    /// List all tags
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let models = entities::Tag::find()
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    /// Find tags by IDs
    pub async fn find_tags_by_ids(&self, tag_ids: &[i64]) -> Result<Vec<Tag>> {
        if tag_ids.is_empty() {
            return Ok(vec![]);
        }

        let models = entities::Tag::find()
            .filter(tag::Column::Id.is_in(tag_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    // ==================== Items ====================

    /// Create a new item and link its tags atomically
    pub async fn create_item(&self, new_item: &NewItem) -> Result<Item> {
        debug!("Creating item: {} ({})", new_item.name, new_item.sku);

        let txn = self.db.begin().await.map_err(AppError::Database)?;

        let active_model = item::ActiveModel {
            id: NotSet,
            sku: Set(new_item.sku.clone()),
            name: Set(new_item.name.clone()),
            category_id: Set(new_item.category_id),
            user_id: Set(new_item.user_id),
            in_stock: Set(new_item.in_stock),
            available_stock: Set(new_item.available_stock),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&txn).await.map_err(AppError::Database)?;

        for tag_id in &new_item.tag_ids {
            let link = super::entities::item_tag::ActiveModel {
                item_id: Set(model.id),
                tag_id: Set(*tag_id),
            };
            link.insert(&txn).await.map_err(AppError::Database)?;
        }

        txn.commit().await.map_err(AppError::Database)?;

        Ok(model.to_domain())
    }

    /// List items owned by a user, with optional search and date filters.
    ///
    /// Scoping to the owning user is mandatory: callers pass the
    /// authenticated user's ID and only rows with that `user_id` are
    /// returned.
    pub async fn list_items(
        &self,
        user_id: i64,
        filter: &ItemFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ItemDetails>, u64)> {
        debug!("Listing items for user: {}", user_id);

        let mut query = entities::Item::find().filter(item::Column::UserId.eq(user_id));

        if let Some(term) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(item::Column::Name.contains(term.as_str()))
                    .add(item::Column::Sku.contains(term.as_str())),
            );
        }

        if let Some((start, end)) = filter.date_bounds() {
            query = query.filter(item::Column::CreatedAt.between(start, end));
        }

        let paginator = query
            .find_also_related(entities::Category)
            .order_by_desc(item::Column::CreatedAt)
            .paginate(&self.db, per_page);

        let total = paginator.num_items().await.map_err(AppError::Database)?;
        let rows = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(AppError::Database)?;

        let mut results = Vec::with_capacity(rows.len());
        for (item_model, category_model) in rows {
            let category = category_model
                .ok_or_else(|| AppError::Internal("Item without category".to_string()))?
                .to_domain();

            let tags = item_model
                .find_related(entities::Tag)
                .all(&self.db)
                .await
                .map_err(AppError::Database)?
                .iter()
                .map(|m| m.to_domain())
                .collect();

            results.push(ItemDetails {
                item: item_model.to_domain(),
                category,
                tags,
            });
        }

        Ok((results, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    async fn memory_db() -> Database {
        // A single connection keeps the whole test on one in-memory database
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        };
        let db = Database::new(&config).await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_user_roundtrip() {
        let db = memory_db().await;

        let created = db
            .create_user("alice", "alice@example.com", "$argon2id$hash")
            .await
            .unwrap();

        let by_id = db.find_user_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");

        let by_name = db.find_user_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);

        let by_email = db
            .find_user_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, created.id);

        assert!(db.find_user_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reset_token_storage() {
        let db = memory_db().await;
        let user = db
            .create_user("bob", "bob@example.com", "hash")
            .await
            .unwrap();

        let expiry = Utc::now() + chrono::Duration::hours(1);
        db.store_reset_token(user.id, "reset-token-123", expiry)
            .await
            .unwrap();

        let found = db
            .find_user_by_reset_token("reset-token-123")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, user.id);
        assert!(found.reset_token_expiry.is_some());
    }

    #[tokio::test]
    async fn test_item_listing_scoped_to_owner() {
        let db = memory_db().await;

        let owner = db
            .create_user("owner", "owner@example.com", "hash")
            .await
            .unwrap();
        let other = db
            .create_user("other", "other@example.com", "hash")
            .await
            .unwrap();
        let category = db.create_category("Bundles").await.unwrap();

        for (sku, user_id) in [
            ("SKU-1", owner.id),
            ("SKU-2", owner.id),
            ("SKU-3", other.id),
        ] {
            db.create_item(&NewItem {
                sku: sku.to_string(),
                name: format!("Item {}", sku),
                category_id: category.id,
                tag_ids: vec![],
                in_stock: 10,
                available_stock: 8,
                user_id,
            })
            .await
            .unwrap();
        }

        let (items, total) = db
            .list_items(owner.id, &ItemFilter::default(), 1, 10)
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert!(items.iter().all(|i| i.item.user_id == owner.id));

        let (items, total) = db
            .list_items(other.id, &ItemFilter::default(), 1, 10)
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(items[0].item.sku, "SKU-3");
    }

    #[tokio::test]
    async fn test_item_search_matches_name_and_sku() {
        let db = memory_db().await;
        let user = db
            .create_user("searcher", "s@example.com", "hash")
            .await
            .unwrap();
        let category = db.create_category("Misc").await.unwrap();

        for (sku, name) in [("ETSY-FOREST", "Etsy Bundle Pack"), ("PLAIN-1", "Notebook")] {
            db.create_item(&NewItem {
                sku: sku.to_string(),
                name: name.to_string(),
                category_id: category.id,
                tag_ids: vec![],
                in_stock: 1,
                available_stock: 1,
                user_id: user.id,
            })
            .await
            .unwrap();
        }

        let filter = ItemFilter {
            search: Some("ETSY".to_string()),
            ..Default::default()
        };
        let (items, _) = db.list_items(user.id, &filter, 1, 10).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item.sku, "ETSY-FOREST");

        let filter = ItemFilter {
            search: Some("Notebook".to_string()),
            ..Default::default()
        };
        let (items, _) = db.list_items(user.id, &filter, 1, 10).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item.sku, "PLAIN-1");
    }

    #[tokio::test]
    async fn test_item_tags_linked() {
        let db = memory_db().await;
        let user = db
            .create_user("tagged", "t@example.com", "hash")
            .await
            .unwrap();
        let category = db.create_category("Bundles").await.unwrap();
        let tag_a = db.create_tag("fragile", "https://img/fragile.png").await.unwrap();
        let tag_b = db.create_tag("bulk", "https://img/bulk.png").await.unwrap();

        db.create_item(&NewItem {
            sku: "TAGGED-1".to_string(),
            name: "Tagged item".to_string(),
            category_id: category.id,
            tag_ids: vec![tag_a.id, tag_b.id],
            in_stock: 5,
            available_stock: 5,
            user_id: user.id,
        })
        .await
        .unwrap();

        let (items, _) = db
            .list_items(user.id, &ItemFilter::default(), 1, 10)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        let mut tag_names: Vec<_> = items[0].tags.iter().map(|t| t.name.clone()).collect();
        tag_names.sort();
        assert_eq!(tag_names, vec!["bulk", "fragile"]);
        assert_eq!(items[0].category.name, "Bundles");
    }

    #[tokio::test]
    async fn test_pagination() {
        let db = memory_db().await;
        let user = db
            .create_user("pager", "p@example.com", "hash")
            .await
            .unwrap();
        let category = db.create_category("Misc").await.unwrap();

        for i in 0..15 {
            db.create_item(&NewItem {
                sku: format!("PAGE-{}", i),
                name: format!("Item {}", i),
                category_id: category.id,
                tag_ids: vec![],
                in_stock: 1,
                available_stock: 1,
                user_id: user.id,
            })
            .await
            .unwrap();
        }

        let (page1, total) = db
            .list_items(user.id, &ItemFilter::default(), 1, 10)
            .await
            .unwrap();
        assert_eq!(total, 15);
        assert_eq!(page1.len(), 10);

        let (page2, _) = db
            .list_items(user.id, &ItemFilter::default(), 2, 10)
            .await
            .unwrap();
        assert_eq!(page2.len(), 5);
    }
}
