use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::config::{AlipayConfig, ConnectionPool};

pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool, alipay_config: AlipayConfig) -> Result<Self> {
        let di_container = DependenciesInject::new(pool, alipay_config)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self { di_container })
    }
}
