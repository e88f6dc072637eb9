use crate::{
    domain::requests::customer::{
        CreateCustomerRequest, DeleteCustomerRequest, UpdateCustomerRequest,
    },
    domain::responses::{ApiResponse, CustomerResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCustomerCommandService = Arc<dyn CustomerCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;

    async fn update(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;

    async fn delete(&self, req: &DeleteCustomerRequest)
    -> Result<ApiResponse<bool>, ServiceError>;
}
