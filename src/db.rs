use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Type alias for the PostgreSQL connection pool
pub type DbPool = PgPool;

/// Open the connection pool for the amendment service
///
/// Amendment requests touch the pool several times each (order fetch, rule
/// snapshot, item writes, totals, status), so the pool is sized for short
/// bursts of small queries rather than a few long-lived ones. Idle
/// connections are recycled after a minute.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(60))
        .connect(database_url)
        .await?;

    tracing::info!("Connected to order store");
    Ok(pool)
}
