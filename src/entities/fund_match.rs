use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Structured explanation persisted alongside a match score.
///
/// Fixed shape rather than an open JSON map: per-criterion sub-scores, the
/// exclusion flag/reason when a sector exclusion fired, and the ordered
/// human-readable detail strings produced while scoring.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct MatchReasons {
    pub geography: i32,
    pub sector: i32,
    pub size: i32,
    pub evidence: i32,
    #[serde(default)]
    pub excluded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusion_reason: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

/// The engine's sole owned table: one row per (fund, entity_type, entity_id),
/// overwritten in place on re-scoring. Zero-score pairs are never written.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i64,
    pub fund_id: Uuid,
    /// Always "operation" today; the key stays generalized for future kinds.
    pub entity_type: String,
    pub entity_id: Uuid,
    pub match_score: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub match_reasons: MatchReasons,
    pub last_scored_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
