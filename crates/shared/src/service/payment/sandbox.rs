use crate::{
    abstract_trait::payment::client::AlipayClientTrait, config::AlipayConfig, errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

/// Gateway client for non-production use. Answers locally with the shapes
/// the real gateway would return, without touching the network.
pub struct SandboxAlipayClient {
    config: AlipayConfig,
}

impl SandboxAlipayClient {
    pub fn new(config: AlipayConfig) -> Result<Self, ServiceError> {
        if !config.sandbox_mode {
            return Err(ServiceError::Gateway(
                "sandbox client refuses to run with sandbox mode disabled".to_string(),
            ));
        }

        Ok(Self { config })
    }
}

#[async_trait]
impl AlipayClientTrait for SandboxAlipayClient {
    async fn trade_precreate(
        &self,
        order_id: &str,
        amount: i64,
        subject: &str,
    ) -> Result<String, ServiceError> {
        info!(
            "🏦 [sandbox] precreate trade | app: {}, order: {order_id}, amount: {amount}, subject: {subject}",
            self.config.app_id
        );

        Ok(format!("https://qr.alipay.com/sandbox/{order_id}"))
    }

    async fn trade_query(&self, order_id: &str) -> Result<String, ServiceError> {
        info!(
            "🏦 [sandbox] query trade | app: {}, order: {order_id}",
            self.config.app_id
        );

        // A sandbox trade is never paid; the gateway keeps waiting for the buyer.
        Ok("WAIT_BUYER_PAY".to_string())
    }
}
