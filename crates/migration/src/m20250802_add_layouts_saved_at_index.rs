use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Layout listings are always newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_layouts_saved_at")
                    .table(Layouts::Table)
                    .col(Layouts::SavedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_layouts_saved_at")
                    .table(Layouts::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Layouts {
    Table,
    SavedAt,
}
