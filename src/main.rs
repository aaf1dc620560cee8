use anyhow::Context;
use dealmatch::{create_app, AppState};
use dotenvy::dotenv;
use sea_orm::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load .env (if present) so DATABASE_URL from file is visible
    let _ = dotenv();

    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let db = Database::connect(&db_url)
        .await
        .context("failed to connect to database")?;

    // Run our server
    let app = create_app(AppState { db });
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Server running on http://{}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
