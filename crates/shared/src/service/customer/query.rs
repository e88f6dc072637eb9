use crate::{
    abstract_trait::customer::{
        repository::query::DynCustomerQueryRepository, service::query::CustomerQueryServiceTrait,
    },
    domain::{
        requests::customer::FindAllCustomers,
        responses::{ApiResponse, ApiResponsePagination, CustomerResponse, Pagination},
    },
    errors::{ServiceError, collect_validation_errors},
    utils::mask_phone,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct CustomerQueryService {
    pub query: DynCustomerQueryRepository,
}

impl CustomerQueryService {
    pub fn new(query: DynCustomerQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CustomerQueryServiceTrait for CustomerQueryService {
    async fn find_all(
        &self,
        req: &FindAllCustomers,
    ) -> Result<ApiResponsePagination<Vec<CustomerResponse>>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        info!(
            "🔍 Searching customers | Page: {}, Size: {}",
            req.page.page, req.page.page_size
        );

        let (customers, total_items) = self.query.find_all(req).await.map_err(|e| {
            error!("❌ Failed to fetch customers: {e:?}");
            ServiceError::from(e)
        })?;

        let total_pages = (total_items as f64 / req.page.page_size as f64).ceil() as i32;

        info!(
            "✅ Found {} customers (total: {total_items})",
            customers.len()
        );

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Customers retrieved successfully".to_string(),
            data: customers.into_iter().map(CustomerResponse::from).collect(),
            pagination: Pagination {
                page: req.page.page,
                page_size: req.page.page_size,
                total_items,
                total_pages,
            },
        })
    }

    async fn find_by_id(
        &self,
        customer_id: i32,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        info!("🔍 Fetching customer id {customer_id}");

        let customer = self.query.find_by_id(customer_id).await.map_err(|e| {
            error!("❌ Failed to fetch customer {customer_id}: {e:?}");
            ServiceError::from(e)
        })?;

        info!(
            "✅ Found customer {} ({})",
            customer.customer_id,
            mask_phone(&customer.phone)
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Customer retrieved successfully".to_string(),
            data: CustomerResponse::from(customer),
        })
    }
}
