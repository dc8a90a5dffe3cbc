use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tag database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    /// Tag ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Tag name
    pub name: String,

    /// Tag image source
    #[sea_orm(column_type = "Text")]
    pub img: String,
}

/// Tag entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        super::item_tag::Relation::Item.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::item_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert the database model to the domain tag model
    pub fn to_domain(&self) -> crate::core::models::Tag {
        crate::core::models::Tag {
            id: self.id,
            name: self.name.clone(),
            img: self.img.clone(),
        }
    }
}
