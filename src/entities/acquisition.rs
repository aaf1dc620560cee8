use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// A past acquisition completed by a fund. Append-only history used as a
/// soft relevance signal when scoring new opportunities.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "acquisitions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i64,
    pub fund_id: Uuid,
    pub company_name: Option<String>,
    pub country: Option<String>,
    pub sector: Option<String>,
    pub acquired_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
