use anyhow::{Context, Result};
use apigateway::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use mimalloc::MiMalloc;
use shared::{
    config::{AlipayConfig, Config, ConnectionManager},
    utils::init_logger,
};
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let _guard = init_logger("apigateway");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url, config.max_connections)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        ConnectionManager::run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let alipay_config = AlipayConfig::init().context("Failed to load Alipay configuration")?;

    let state = AppState::new(pool, alipay_config).context("Failed to create AppState")?;

    println!("🚀 Server started successfully");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
