use crate::{
    domain::requests::customer::FindAllCustomers, errors::RepositoryError,
    model::customer::CustomerModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCustomerQueryRepository = Arc<dyn CustomerQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllCustomers,
    ) -> Result<(Vec<CustomerModel>, i64), RepositoryError>;

    async fn find_by_id(&self, customer_id: i32) -> Result<CustomerModel, RepositoryError>;
}
