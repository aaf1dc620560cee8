use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Acquisitions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Acquisitions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Acquisitions::FundId).uuid().not_null())
                    .col(ColumnDef::new(Acquisitions::CompanyName).string().null())
                    .col(ColumnDef::new(Acquisitions::Country).string().null())
                    .col(ColumnDef::new(Acquisitions::Sector).string().null())
                    .col(
                        ColumnDef::new(Acquisitions::AcquiredAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Acquisitions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // History is always read per fund.
        manager
            .create_index(
                Index::create()
                    .name("idx_acquisitions_fund_id")
                    .table(Acquisitions::Table)
                    .col(Acquisitions::FundId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Acquisitions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Acquisitions {
    Table,
    Id,
    FundId,
    CompanyName,
    Country,
    Sector,
    AcquiredAt,
    CreatedAt,
}
