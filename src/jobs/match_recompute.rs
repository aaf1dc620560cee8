use sea_orm::DatabaseConnection;
use std::error::Error;
use uuid::Uuid;

use crate::matching::{run_matching, MatchScope, SqlMatchRepository};

/// Recompute the full fund x operation product and upsert the results.
/// Safe to re-run at any time; every surviving pair is overwritten in place.
pub async fn run_match_recompute(
    conn: &DatabaseConnection,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let repo = SqlMatchRepository::new(conn.clone());
    let summary = run_matching(conn, &repo, MatchScope::AllOperations).await?;
    tracing::info!(
        "Full recompute finished: {} matches persisted across {} operations",
        summary.matches_calculated,
        summary.operations_processed
    );
    Ok(())
}

/// Re-score a single operation against every fund, e.g. right after the
/// operation was created or edited.
pub async fn run_operation_match(
    conn: &DatabaseConnection,
    operation_id: Uuid,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let repo = SqlMatchRepository::new(conn.clone());
    let summary = run_matching(conn, &repo, MatchScope::Operation(operation_id)).await?;
    if summary.operations_processed == 0 {
        tracing::warn!(%operation_id, "operation not found or not active; nothing scored");
    } else {
        tracing::info!(
            "Operation {} re-scored: {} matches persisted",
            operation_id,
            summary.matches_calculated
        );
    }
    Ok(())
}
