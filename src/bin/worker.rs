use dealmatch::jobs::{run_match_recompute, run_operation_match};
use dotenvy::dotenv;
use sea_orm::Database;
use std::env;
use std::time::Duration;
use tokio::time::interval;
use tracing::{error, info};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

const DEFAULT_INTERVAL_SECS: u64 = 15 * 60;

#[tokio::main]
async fn main() {
    // Initialise tracing (INFO level)
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load .env (if present) so DATABASE_URL from file is visible
    let _ = dotenv();

    // Command-line flags
    let args: Vec<String> = env::args().collect();
    let run_all_once = args.iter().any(|a| a == "--recalculate-all");
    let operation_arg = args
        .iter()
        .position(|a| a == "--operation")
        .and_then(|i| args.get(i + 1))
        .cloned();

    let db_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            error!("DATABASE_URL not set; the matching worker needs a database");
            return;
        }
    };
    let conn = match Database::connect(&db_url).await {
        Ok(conn) => conn,
        Err(e) => {
            error!(?e, "failed to connect to database");
            return;
        }
    };

    // Re-score a single operation once if requested
    if let Some(raw_id) = operation_arg {
        match Uuid::parse_str(&raw_id) {
            Ok(id) => {
                if let Err(e) = run_operation_match(&conn, id).await {
                    error!(?e, "operation match job failed");
                }
            }
            Err(e) => error!(?e, "invalid operation id '{}'", raw_id),
        }
        return;
    }

    // Run full recompute once if flag is set
    if run_all_once {
        if let Err(e) = run_match_recompute(&conn).await {
            error!(?e, "match recompute job failed");
        }
        return;
    }

    let interval_secs = env::var("WORKER_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);
    info!(
        "Worker starting; running full match recompute every {} seconds",
        interval_secs
    );

    let mut ticker = interval(Duration::from_secs(interval_secs));
    loop {
        ticker.tick().await;
        info!("Running scheduled match recompute...");
        if let Err(e) = run_match_recompute(&conn).await {
            error!(?e, "match recompute job failed");
        }
        info!("Scheduled recompute finished.");
    }
}
