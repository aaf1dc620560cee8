use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Funds::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Funds::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Funds::Name).string().not_null())
                    .col(ColumnDef::new(Funds::Status).string().not_null())
                    .col(ColumnDef::new(Funds::GeographyFocus).array(ColumnType::Text).null())
                    .col(ColumnDef::new(Funds::SectorFocus).array(ColumnType::Text).null())
                    .col(ColumnDef::new(Funds::SectorExclusions).array(ColumnType::Text).null())
                    .col(ColumnDef::new(Funds::EbitdaMin).big_integer().null())
                    .col(ColumnDef::new(Funds::EbitdaMax).big_integer().null())
                    .col(ColumnDef::new(Funds::RevenueMin).big_integer().null())
                    .col(ColumnDef::new(Funds::RevenueMax).big_integer().null())
                    .col(
                        ColumnDef::new(Funds::CreatedAt)
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
            .drop_table(Table::drop().table(Funds::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Funds {
    Table,
    Id,
    Name,
    Status,
    GeographyFocus,
    SectorFocus,
    SectorExclusions,
    EbitdaMin,
    EbitdaMax,
    RevenueMin,
    RevenueMax,
    CreatedAt,
}
