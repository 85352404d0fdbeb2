use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Layouts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Layouts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Layouts::Name).string().not_null())
                    .col(ColumnDef::new(Layouts::SavedBy).string().not_null())
                    .col(
                        ColumnDef::new(Layouts::SavedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Layouts::State).json().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Layouts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Layouts {
    Table,
    Id,
    Name,
    SavedBy,
    SavedAt,
    State,
}
