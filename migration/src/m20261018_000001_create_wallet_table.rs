use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wallet::Table)
                    .if_not_exists()
                    .col(string(Wallet::Id).primary_key())
                    .col(string(Wallet::Name))
                    .col(string(Wallet::Address))
                    .col(timestamp_with_time_zone(Wallet::Created))
                    .col(timestamp_with_time_zone_null(Wallet::Updated))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wallet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Wallet {
    Table,
    Id,
    Name,
    Address,
    Created,
    Updated,
}
