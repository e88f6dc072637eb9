use crate::{
    domain::requests::customer::FindAllCustomers,
    domain::responses::{ApiResponse, ApiResponsePagination, CustomerResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCustomerQueryService = Arc<dyn CustomerQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllCustomers,
    ) -> Result<ApiResponsePagination<Vec<CustomerResponse>>, ServiceError>;

    async fn find_by_id(
        &self,
        customer_id: i32,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
}
