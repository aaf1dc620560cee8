use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Operations::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Operations::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Operations::CompanyName).string().not_null())
                    .col(ColumnDef::new(Operations::GeographicLocation).string().null())
                    .col(ColumnDef::new(Operations::Sector).string().null())
                    .col(ColumnDef::new(Operations::Subsector).string().null())
                    .col(ColumnDef::new(Operations::RevenueAmount).big_integer().null())
                    .col(ColumnDef::new(Operations::EbitdaAmount).big_integer().null())
                    .col(ColumnDef::new(Operations::Status).string().not_null())
                    .col(
                        ColumnDef::new(Operations::CreatedAt)
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
            .drop_table(Table::drop().table(Operations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Operations {
    Table,
    Id,
    CompanyName,
    GeographicLocation,
    Sector,
    Subsector,
    RevenueAmount,
    EbitdaAmount,
    Status,
    CreatedAt,
}
