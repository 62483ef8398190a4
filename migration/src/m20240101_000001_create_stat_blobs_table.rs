use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatBlobs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StatBlobs::StorageKey)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StatBlobs::Payload).text().not_null())
                    .col(
                        ColumnDef::new(StatBlobs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatBlobs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StatBlobs {
    Table,
    StorageKey,
    Payload,
    UpdatedAt,
}
