use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// An investment vehicle searching (or formerly searching) for acquisitions.
/// Owned by the fund-management CRUD; the matching engine only reads it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "funds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// Free text; only the literal "searching" avoids the status penalty.
    pub status: String,
    /// Null or empty means "no stated preference".
    pub geography_focus: Option<Vec<String>>,
    pub sector_focus: Option<Vec<String>>,
    /// Sectors that hard-disqualify an operation regardless of other criteria.
    pub sector_exclusions: Option<Vec<String>>,
    /// Null bound = unbounded on that side.
    pub ebitda_min: Option<i64>,
    pub ebitda_max: Option<i64>,
    pub revenue_min: Option<i64>,
    pub revenue_max: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
