use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::product::ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError>;

    async fn update(&self, req: &UpdateProductRequest) -> Result<ProductModel, RepositoryError>;
}
