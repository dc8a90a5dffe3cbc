use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ItemTags::ItemId).big_integer().not_null())
                    .col(ColumnDef::new(ItemTags::TagId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_item_tags")
                            .col(ItemTags::ItemId)
                            .col(ItemTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_tags_item_id")
                            .from(ItemTags::Table, ItemTags::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_tags_tag_id")
                            .from(ItemTags::Table, ItemTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ItemTags {
    Table,
    ItemId,
    TagId,
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
}
