use crate::{
    domain::requests::transaction::{
        CreateTransactionRequest, RefundTransactionRequest, UpdateTransactionStatusRequest,
    },
    domain::responses::{ApiResponse, TransactionResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionCommandService = Arc<dyn TransactionCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError>;

    async fn update_status(
        &self,
        req: &UpdateTransactionStatusRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError>;

    async fn refund(
        &self,
        req: &RefundTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError>;
}
