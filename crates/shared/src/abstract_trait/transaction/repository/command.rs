use crate::{
    domain::requests::transaction::InsertTransaction, errors::RepositoryError,
    model::transaction::TransactionModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionCommandRepository = Arc<dyn TransactionCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionCommandRepositoryTrait {
    async fn create(&self, req: &InsertTransaction) -> Result<TransactionModel, RepositoryError>;

    /// Writes the new status only; every other column is left untouched.
    async fn update_status(
        &self,
        order_id: &str,
        status: &str,
    ) -> Result<TransactionModel, RepositoryError>;
}
