use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item-tag link database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "item_tags")]
pub struct Model {
    /// Linked item ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: i64,

    /// Linked tag ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i64,
}

/// Item-tag link entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Linked item
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id"
    )]
    Item,

    /// Linked tag
    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagId",
        to = "super::tag::Column::Id"
    )]
    Tag,
}

impl ActiveModelBehavior for ActiveModel {}
