use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

pub type ConnectionPool = sqlx::Pool<sqlx::Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(database_url: &str, max_connections: u32) -> Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;

        info!("✅ Database pool initialized (max: {max_connections})");

        Ok(pool)
    }

    pub async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(pool)
            .await
            .context("Failed to run database migrations")?;

        info!("✅ Database migrations applied");

        Ok(())
    }
}
