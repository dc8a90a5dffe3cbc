use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Item ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Stock keeping unit (unique)
    #[sea_orm(unique)]
    pub sku: String,

    /// Item name
    pub name: String,

    /// Category this item belongs to
    pub category_id: i64,

    /// User that owns this item
    pub user_id: i64,

    /// Units currently in stock
    pub in_stock: i32,

    /// Units available for sale
    pub available_stock: i32,

    /// Creation timestamp
    pub created_at: DateTimeUtc,
}

/// Item entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Category this item belongs to
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,

    /// User that owns this item
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::item_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::item_tag::Relation::Item.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert the database model to the domain item model
    pub fn to_domain(&self) -> crate::core::models::Item {
        crate::core::models::Item {
            id: self.id,
            sku: self.sku.clone(),
            name: self.name.clone(),
            in_stock: self.in_stock,
            available_stock: self.available_stock,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }
}
