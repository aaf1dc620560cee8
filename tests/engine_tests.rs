use async_trait::async_trait;
use chrono::Utc;
use dealmatch::entities::{acquisition, fund, operation};
use dealmatch::matching::{
    run_matching, MatchRepository, MatchScope, NewMatch, ENTITY_TYPE_OPERATION,
};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use std::sync::Mutex;
use uuid::Uuid;

/// Captures every upsert instead of touching a database.
#[derive(Default)]
struct RecordingRepository {
    rows: Mutex<Vec<NewMatch>>,
}

#[async_trait]
impl MatchRepository for RecordingRepository {
    async fn upsert(&self, row: NewMatch) -> Result<(), DbErr> {
        self.rows.lock().unwrap().push(row);
        Ok(())
    }
}

/// Rejects writes for one fund to simulate per-pair persistence failures.
struct FlakyRepository {
    rows: Mutex<Vec<NewMatch>>,
    fail_for_fund: Uuid,
}

#[async_trait]
impl MatchRepository for FlakyRepository {
    async fn upsert(&self, row: NewMatch) -> Result<(), DbErr> {
        if row.fund_id == self.fail_for_fund {
            return Err(DbErr::Custom("connection reset".to_string()));
        }
        self.rows.lock().unwrap().push(row);
        Ok(())
    }
}

fn fund(name: &str, status: &str) -> fund::Model {
    fund::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        status: status.to_string(),
        geography_focus: None,
        sector_focus: None,
        sector_exclusions: None,
        ebitda_min: None,
        ebitda_max: None,
        revenue_min: None,
        revenue_max: None,
        created_at: Utc::now(),
    }
}

fn active_operation(company: &str) -> operation::Model {
    operation::Model {
        id: Uuid::new_v4(),
        company_name: company.to_string(),
        geographic_location: None,
        sector: None,
        subsector: None,
        revenue_amount: None,
        ebitda_amount: None,
        status: "active".to_string(),
        created_at: Utc::now(),
    }
}

/// Mock connection that replays the three bulk loads the engine performs,
/// in order: funds, operations, acquisitions.
fn mock_db(
    funds: Vec<fund::Model>,
    operations: Vec<operation::Model>,
    acquisitions: Vec<acquisition::Model>,
) -> sea_orm::DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([funds])
        .append_query_results([operations])
        .append_query_results([acquisitions])
        .into_connection()
}

#[tokio::test]
async fn full_recompute_scores_cartesian_product_and_skips_exclusions() {
    let mut tech_fund = fund("Iberia Tech Capital", "searching");
    tech_fund.geography_focus = Some(vec!["Spain".to_string()]);
    tech_fund.sector_focus = Some(vec!["technology".to_string()]);
    tech_fund.ebitda_min = Some(500_000);
    tech_fund.ebitda_max = Some(2_000_000);

    let mut generalist_fund = fund("Generalist Holdings", "searching");
    generalist_fund.sector_exclusions = Some(vec!["technology".to_string()]);

    let mut spanish_tech = active_operation("Software del Norte");
    spanish_tech.geographic_location = Some("Spain".to_string());
    spanish_tech.sector = Some("Technology".to_string());
    spanish_tech.ebitda_amount = Some(1_000_000);

    let mut french_retail = active_operation("Boutique SARL");
    french_retail.geographic_location = Some("France".to_string());
    french_retail.sector = Some("Retail".to_string());

    let db = mock_db(
        vec![tech_fund.clone(), generalist_fund.clone()],
        vec![spanish_tech.clone(), french_retail.clone()],
        vec![],
    );
    let repo = RecordingRepository::default();

    let summary = run_matching(&db, &repo, MatchScope::AllOperations)
        .await
        .unwrap();

    assert_eq!(summary.operations_processed, 2);
    // generalist_fund x spanish_tech is excluded (zero score, no row);
    // the other three pairs all score positive.
    assert_eq!(summary.matches_calculated, 3);

    let rows = repo.rows.lock().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.match_score > 0));
    assert!(rows.iter().all(|r| r.entity_type == ENTITY_TYPE_OPERATION));
    assert!(!rows
        .iter()
        .any(|r| r.fund_id == generalist_fund.id && r.entity_id == spanish_tech.id));

    let tech_pair = rows
        .iter()
        .find(|r| r.fund_id == tech_fund.id && r.entity_id == spanish_tech.id)
        .expect("tech fund x spanish tech operation should be persisted");
    assert_eq!(tech_pair.match_score, 75);
    assert_eq!(tech_pair.match_reasons.geography, 30);
}

#[tokio::test]
async fn targeted_run_scores_one_operation_against_every_fund() {
    let mut tech_fund = fund("Iberia Tech Capital", "searching");
    tech_fund.geography_focus = Some(vec!["Spain".to_string()]);
    tech_fund.sector_focus = Some(vec!["technology".to_string()]);
    tech_fund.ebitda_min = Some(500_000);
    tech_fund.ebitda_max = Some(2_000_000);
    let paused_fund = fund("Paused Partners", "paused");

    let mut spanish_tech = active_operation("Software del Norte");
    spanish_tech.geographic_location = Some("Spain".to_string());
    spanish_tech.sector = Some("Technology".to_string());
    spanish_tech.ebitda_amount = Some(1_000_000);

    // Evidence rows are grouped per fund: the tech fund has been here before.
    let history = vec![acquisition::Model {
        id: 1,
        fund_id: tech_fund.id,
        company_name: Some("Previous Deal SL".to_string()),
        country: Some("Spain".to_string()),
        sector: Some("Technology".to_string()),
        acquired_at: None,
        created_at: Utc::now(),
    }];

    let db = mock_db(
        vec![tech_fund.clone(), paused_fund.clone()],
        vec![spanish_tech.clone()],
        history,
    );
    let repo = RecordingRepository::default();

    let summary = run_matching(&db, &repo, MatchScope::Operation(spanish_tech.id))
        .await
        .unwrap();

    assert_eq!(summary.operations_processed, 1);
    assert_eq!(summary.matches_calculated, 2);

    let rows = repo.rows.lock().unwrap();
    assert!(rows.iter().all(|r| r.entity_id == spanish_tech.id));

    // 30 + 25 + 15 + 20 with the full evidence bonus.
    let tech_row = rows.iter().find(|r| r.fund_id == tech_fund.id).unwrap();
    assert_eq!(tech_row.match_score, 90);
    assert_eq!(tech_row.match_reasons.evidence, 20);

    // The paused fund only sees neutral branches (15+12+5+5) minus the
    // status penalty; its history is empty because grouping is per fund.
    let paused_row = rows.iter().find(|r| r.fund_id == paused_fund.id).unwrap();
    assert_eq!(paused_row.match_score, 7);
}

#[tokio::test]
async fn targeted_run_with_no_matching_operation_is_a_noop() {
    let db = mock_db(vec![fund("Any Fund", "searching")], vec![], vec![]);
    let repo = RecordingRepository::default();

    let summary = run_matching(&db, &repo, MatchScope::Operation(Uuid::new_v4()))
        .await
        .unwrap();

    assert_eq!(summary.operations_processed, 0);
    assert_eq!(summary.matches_calculated, 0);
    assert!(repo.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn zero_score_pairs_are_not_persisted() {
    // Mismatched on every declared criterion and penalized: 18 - 30 floors to 0.
    let mut cold_fund = fund("Cold Fund", "closed");
    cold_fund.geography_focus = Some(vec!["Germany".to_string()]);
    cold_fund.sector_focus = Some(vec!["manufacturing".to_string()]);

    let mut warm_fund = fund("Warm Fund", "searching");
    warm_fund.geography_focus = Some(vec!["Germany".to_string()]);
    warm_fund.sector_focus = Some(vec!["manufacturing".to_string()]);

    let mut operation = active_operation("Tapas Chain SL");
    operation.geographic_location = Some("Spain".to_string());
    operation.sector = Some("Hospitality".to_string());

    let history = vec![acquisition::Model {
        id: 1,
        fund_id: cold_fund.id,
        company_name: None,
        country: Some("Germany".to_string()),
        sector: Some("Manufacturing".to_string()),
        acquired_at: None,
        created_at: Utc::now(),
    }];

    let db = mock_db(
        vec![cold_fund.clone(), warm_fund.clone()],
        vec![operation],
        history,
    );
    let repo = RecordingRepository::default();

    let summary = run_matching(&db, &repo, MatchScope::AllOperations)
        .await
        .unwrap();

    assert_eq!(summary.operations_processed, 1);
    assert_eq!(summary.matches_calculated, 1);

    let rows = repo.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].fund_id, warm_fund.id);
}

#[tokio::test]
async fn per_pair_write_failures_are_skipped_not_fatal() {
    let healthy_fund = fund("Healthy Fund", "searching");
    let broken_fund = fund("Broken Fund", "searching");
    let operation = active_operation("Any Co");

    let db = mock_db(
        vec![healthy_fund.clone(), broken_fund.clone()],
        vec![operation],
        vec![],
    );
    let repo = FlakyRepository {
        rows: Mutex::new(Vec::new()),
        fail_for_fund: broken_fund.id,
    };

    let summary = run_matching(&db, &repo, MatchScope::AllOperations)
        .await
        .unwrap();

    // Both pairs score positive, only one write survives; the batch still
    // completes and the counts reflect what was actually persisted.
    assert_eq!(summary.operations_processed, 1);
    assert_eq!(summary.matches_calculated, 1);

    let rows = repo.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].fund_id, healthy_fund.id);
}
