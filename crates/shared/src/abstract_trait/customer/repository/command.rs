use crate::{
    domain::requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    errors::RepositoryError,
    model::customer::CustomerModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCustomerCommandRepository = Arc<dyn CustomerCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerCommandRepositoryTrait {
    async fn create(&self, req: &CreateCustomerRequest) -> Result<CustomerModel, RepositoryError>;

    async fn update(&self, req: &UpdateCustomerRequest) -> Result<CustomerModel, RepositoryError>;

    async fn delete(&self, customer_id: i32) -> Result<(), RepositoryError>;
}
