use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAlipayClient = Arc<dyn AlipayClientTrait + Send + Sync>;

/// Seam in front of the Alipay trade gateway. The wire protocol lives
/// entirely behind this trait; amounts are minor units.
#[async_trait]
pub trait AlipayClientTrait {
    /// Creates a trade and returns the QR code content to present.
    async fn trade_precreate(
        &self,
        order_id: &str,
        amount: i64,
        subject: &str,
    ) -> Result<String, ServiceError>;

    /// Returns the gateway's raw trade status for an order.
    async fn trade_query(&self, order_id: &str) -> Result<String, ServiceError>;
}
