use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use crate::entities::fund_match::{self, MatchReasons};

/// A freshly computed match, ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub fund_id: Uuid,
    pub entity_type: String,
    pub entity_id: Uuid,
    pub match_score: i32,
    pub match_reasons: MatchReasons,
    pub last_scored_at: DateTime<Utc>,
}

/// Persistence boundary for match rows. The scorers and the orchestrator stay
/// free of storage concerns; tests inject an in-memory implementation.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Idempotent write keyed on (fund_id, entity_type, entity_id): a prior
    /// row for the same key is overwritten, never duplicated.
    async fn upsert(&self, row: NewMatch) -> Result<(), DbErr>;
}

/// Production implementation backed by the `matches` table.
pub struct SqlMatchRepository {
    db: DatabaseConnection,
}

impl SqlMatchRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MatchRepository for SqlMatchRepository {
    async fn upsert(&self, row: NewMatch) -> Result<(), DbErr> {
        let model = fund_match::ActiveModel {
            fund_id: Set(row.fund_id),
            entity_type: Set(row.entity_type),
            entity_id: Set(row.entity_id),
            match_score: Set(row.match_score),
            match_reasons: Set(row.match_reasons),
            last_scored_at: Set(row.last_scored_at),
            ..Default::default()
        };

        fund_match::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    fund_match::Column::FundId,
                    fund_match::Column::EntityType,
                    fund_match::Column::EntityId,
                ])
                .update_columns([
                    fund_match::Column::MatchScore,
                    fund_match::Column::MatchReasons,
                    fund_match::Column::LastScoredAt,
                ])
                .to_owned(),
            )
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
