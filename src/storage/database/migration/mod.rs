use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users_table;
mod m20240601_000002_create_categories_table;
mod m20240601_000003_create_tags_table;
mod m20240601_000004_create_items_table;
mod m20240601_000005_create_item_tags_table;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users_table::Migration),
            Box::new(m20240601_000002_create_categories_table::Migration),
            Box::new(m20240601_000003_create_tags_table::Migration),
            Box::new(m20240601_000004_create_items_table::Migration),
            Box::new(m20240601_000005_create_item_tags_table::Migration),
        ]
    }
}
