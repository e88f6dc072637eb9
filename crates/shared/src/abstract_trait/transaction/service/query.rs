use crate::{
    domain::requests::transaction::FindAllTransactions,
    domain::responses::{
        ApiResponse, ApiResponsePagination, PaymentStatusResponse, TransactionResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryService = Arc<dyn TransactionQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllTransactions,
    ) -> Result<ApiResponsePagination<Vec<TransactionResponse>>, ServiceError>;

    async fn find_by_id(
        &self,
        transaction_id: i32,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError>;

    async fn get_status(
        &self,
        order_id: &str,
    ) -> Result<ApiResponse<PaymentStatusResponse>, ServiceError>;
}
