use std::collections::HashMap;

use chrono::Utc;
use futures::{future, stream, StreamExt};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::{acquisition, fund, operation};
use crate::matching::repository::{MatchRepository, NewMatch};
use crate::matching::score::score_pair;

/// Only operations in this status are eligible for scoring.
pub const OPERATION_STATUS_ACTIVE: &str = "active";

/// The generalized match key supports other entity kinds later; operations
/// are the only kind scored today.
pub const ENTITY_TYPE_OPERATION: &str = "operation";

/// Scoring is pure and cheap; this bounds concurrent upserts so a full
/// recompute does not overwhelm the database.
const MAX_CONCURRENT_UPSERTS: usize = 8;

/// Which slice of the pipeline a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// Score one operation against every fund.
    Operation(Uuid),
    /// Score every active operation against every fund.
    AllOperations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRunSummary {
    /// Positive-score matches actually persisted.
    pub matches_calculated: usize,
    /// Active operations considered in this run.
    pub operations_processed: usize,
}

/// Load funds, operations and acquisition history, score every pair in
/// scope, and upsert the strictly-positive results.
///
/// Zero-score pairs (including exclusions) leave no row behind. Per-pair
/// write failures are logged and skipped; only a failed bulk load aborts
/// the run.
pub async fn run_matching<R: MatchRepository>(
    db: &DatabaseConnection,
    repo: &R,
    scope: MatchScope,
) -> Result<MatchRunSummary, DbErr> {
    let funds = fund::Entity::find().all(db).await?;

    let mut operation_query =
        operation::Entity::find().filter(operation::Column::Status.eq(OPERATION_STATUS_ACTIVE));
    if let MatchScope::Operation(id) = scope {
        operation_query = operation_query.filter(operation::Column::Id.eq(id));
    }
    let operations = operation_query.all(db).await?;

    // One bulk load of history, grouped per fund, instead of a query per pair.
    let mut history: HashMap<Uuid, Vec<acquisition::Model>> = HashMap::new();
    for row in acquisition::Entity::find().all(db).await? {
        history.entry(row.fund_id).or_default().push(row);
    }

    tracing::info!(
        funds = funds.len(),
        operations = operations.len(),
        "scoring fund-operation pairs"
    );

    let scored_at = Utc::now();
    let no_history: Vec<acquisition::Model> = Vec::new();
    let mut candidates = Vec::new();
    for operation in &operations {
        for fund in &funds {
            let past = history.get(&fund.id).unwrap_or(&no_history);
            let scored = score_pair(fund, operation, past);
            if scored.score > 0 {
                candidates.push(NewMatch {
                    fund_id: fund.id,
                    entity_type: ENTITY_TYPE_OPERATION.to_string(),
                    entity_id: operation.id,
                    match_score: scored.score,
                    match_reasons: scored.reasons,
                    last_scored_at: scored_at,
                });
            }
        }
    }

    let candidate_count = candidates.len();
    let matches_calculated = stream::iter(candidates)
        .map(|row| async move {
            let fund_id = row.fund_id;
            let entity_id = row.entity_id;
            match repo.upsert(row).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!(%fund_id, %entity_id, error = %e, "match upsert failed; skipping pair");
                    false
                }
            }
        })
        .buffer_unordered(MAX_CONCURRENT_UPSERTS)
        .filter(|persisted| future::ready(*persisted))
        .count()
        .await;

    if matches_calculated < candidate_count {
        tracing::warn!(
            failed = candidate_count - matches_calculated,
            "some match upserts failed"
        );
    }
    tracing::info!(
        matches_calculated,
        operations_processed = operations.len(),
        "matching run finished"
    );

    Ok(MatchRunSummary {
        matches_calculated,
        operations_processed: operations.len(),
    })
}
