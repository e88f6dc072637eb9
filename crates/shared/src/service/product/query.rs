use crate::{
    abstract_trait::product::{
        repository::query::DynProductQueryRepository, service::query::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::FindAllProducts,
        responses::{ApiResponse, ApiResponsePagination, Pagination, ProductResponse},
    },
    errors::{ServiceError, collect_validation_errors},
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        info!(
            "🔍 Searching products | Page: {}, Size: {}",
            req.page.page, req.page.page_size
        );

        let (products, total_items) = self.query.find_all(req).await.map_err(|e| {
            error!("❌ Failed to fetch products: {e:?}");
            ServiceError::from(e)
        })?;

        let total_pages = (total_items as f64 / req.page.page_size as f64).ceil() as i32;

        info!("✅ Found {} products (total: {total_items})", products.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data: products.into_iter().map(ProductResponse::from).collect(),
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
        product_id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🔍 Fetching product id {product_id}");

        let product = self.query.find_by_id(product_id).await.map_err(|e| {
            error!("❌ Failed to fetch product {product_id}: {e:?}");
            ServiceError::from(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product retrieved successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }
}
