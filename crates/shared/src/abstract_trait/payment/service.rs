use crate::{
    domain::requests::payment::CreateAlipayPaymentRequest,
    domain::responses::{AlipayCreateResponse, ApiResponse, PaymentStatusResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAlipayService = Arc<dyn AlipayServiceTrait + Send + Sync>;

#[async_trait]
pub trait AlipayServiceTrait {
    async fn create_payment(
        &self,
        req: &CreateAlipayPaymentRequest,
    ) -> Result<ApiResponse<AlipayCreateResponse>, ServiceError>;

    async fn query_status(
        &self,
        order_id: &str,
    ) -> Result<ApiResponse<PaymentStatusResponse>, ServiceError>;
}
