use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// A business-sale opportunity tracked in the deal pipeline.
/// Owned by the deal-sourcing CRUD; the matching engine only reads it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "operations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company_name: String,
    pub geographic_location: Option<String>,
    pub sector: Option<String>,
    pub subsector: Option<String>,
    pub revenue_amount: Option<i64>,
    pub ebitda_amount: Option<i64>,
    /// Must be "active" to be eligible for scoring.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
