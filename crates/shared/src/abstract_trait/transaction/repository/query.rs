use crate::{
    domain::requests::transaction::FindAllTransactions, errors::RepositoryError,
    model::transaction::TransactionModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllTransactions,
    ) -> Result<(Vec<TransactionModel>, i64), RepositoryError>;

    async fn find_by_id(&self, transaction_id: i32) -> Result<TransactionModel, RepositoryError>;

    async fn find_by_order_id(&self, order_id: &str) -> Result<TransactionModel, RepositoryError>;
}
