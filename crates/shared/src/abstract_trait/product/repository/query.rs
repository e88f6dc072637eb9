use crate::{
    domain::requests::product::FindAllProducts, errors::RepositoryError,
    model::product::ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;

    async fn find_by_id(&self, product_id: i32) -> Result<ProductModel, RepositoryError>;
}
