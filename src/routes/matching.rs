use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;
use crate::matching::{run_matching, MatchScope, SqlMatchRepository, ENTITY_TYPE_OPERATION};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecalculateRequest {
    /// Kind of entity to score; only "operation" is supported.
    pub entity_type: String,
    /// Single operation to re-score against every fund.
    pub entity_id: Option<Uuid>,
    /// Recompute the full fund x operation product, ignoring entityId.
    #[serde(default)]
    pub recalculate_all: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecalculateResponse {
    /// Positive-score matches persisted by this run.
    pub matches_calculated: usize,
    /// Active operations considered by this run.
    pub operations_processed: usize,
}

/// Trigger a matching run: one operation against all funds, or a full recompute
#[utoipa::path(
    post,
    path = "/matching/recalculate",
    request_body = RecalculateRequest,
    responses(
        (status = 200, description = "Matching run finished", body = RecalculateResponse),
        (status = 400, description = "Neither entityId nor recalculateAll provided"),
        (status = 422, description = "Unsupported entity type"),
        (status = 500, description = "Could not load funds, operations or history")
    )
)]
#[tracing::instrument(skip(state, payload), fields(entity_type = %payload.entity_type, recalculate_all = payload.recalculate_all))]
pub async fn recalculate_matches(
    State(state): State<AppState>,
    Json(payload): Json<RecalculateRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.entity_type != ENTITY_TYPE_OPERATION {
        return Err(AppError::UnsupportedEntityType(payload.entity_type));
    }

    let scope = if payload.recalculate_all {
        MatchScope::AllOperations
    } else if let Some(id) = payload.entity_id {
        MatchScope::Operation(id)
    } else {
        return Err(AppError::InvalidRequest(
            "either entityId or recalculateAll must be provided".to_string(),
        ));
    };

    let repo = SqlMatchRepository::new(state.db.clone());
    let summary = run_matching(&state.db, &repo, scope)
        .await
        .map_err(|e| AppError::LoadFailure(e.to_string()))?;

    Ok(Json(RecalculateResponse {
        matches_calculated: summary.matches_calculated,
        operations_processed: summary.operations_processed,
    }))
}
