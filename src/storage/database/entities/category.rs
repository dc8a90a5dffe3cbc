use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Category ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Category name
    pub name: String,
}

/// Category entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Items in this category
    #[sea_orm(has_many = "super::item::Entity")]
    Items,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert the database model to the domain category model
    pub fn to_domain(&self) -> crate::core::models::Category {
        crate::core::models::Category {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
