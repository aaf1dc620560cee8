use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matches::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Matches::FundId).uuid().not_null())
                    .col(ColumnDef::new(Matches::EntityType).string().not_null())
                    .col(ColumnDef::new(Matches::EntityId).uuid().not_null())
                    .col(ColumnDef::new(Matches::MatchScore).integer().not_null())
                    .col(ColumnDef::new(Matches::MatchReasons).json_binary().not_null())
                    .col(
                        ColumnDef::new(Matches::LastScoredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The upsert key: one row per (fund, entity_type, entity_id).
        manager
            .create_index(
                Index::create()
                    .name("idx_matches_fund_entity")
                    .table(Matches::Table)
                    .col(Matches::FundId)
                    .col(Matches::EntityType)
                    .col(Matches::EntityId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Matches {
    Table,
    Id,
    FundId,
    EntityType,
    EntityId,
    MatchScore,
    MatchReasons,
    LastScoredAt,
}
