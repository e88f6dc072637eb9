use crate::{
    abstract_trait::product::{
        repository::command::DynProductCommandRepository,
        service::command::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::{ServiceError, collect_validation_errors},
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        info!("📦 Creating product: {}", req.name);

        let product = self.command.create(req).await.map_err(|e| {
            error!("❌ Failed to create product: {e:?}");
            ServiceError::from(e)
        })?;

        info!("✅ Product created: {} (id {})", product.name, product.product_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn update(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        info!("📦 Updating product id {}", req.product_id);

        let product = self.command.update(req).await.map_err(|e| {
            error!("❌ Failed to update product {}: {e:?}", req.product_id);
            ServiceError::from(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::RepositoryError, model::product::ProductModel};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryRepo {
        rows: Mutex<Vec<ProductModel>>,
    }

    #[async_trait]
    impl crate::abstract_trait::product::repository::command::ProductCommandRepositoryTrait
        for InMemoryRepo
    {
        async fn create(
            &self,
            req: &CreateProductRequest,
        ) -> Result<ProductModel, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let model = ProductModel {
                product_id: rows.len() as i32 + 1,
                name: req.name.clone(),
                description: req.description.clone(),
                price: req.price,
                stock: req.stock,
                category: req.category.clone(),
                image_url: req.image_url.clone(),
                created_at: None,
                updated_at: None,
            };
            rows.push(model.clone());
            Ok(model)
        }

        async fn update(
            &self,
            req: &UpdateProductRequest,
        ) -> Result<ProductModel, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|p| p.product_id == req.product_id)
                .ok_or(RepositoryError::NotFound)?;
            row.name = req.name.clone();
            row.price = req.price;
            row.stock = req.stock;
            Ok(row.clone())
        }
    }

    fn create_req(name: &str, price: i64, stock: i32) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            description: String::new(),
            price,
            stock,
            category: "electronics".to_string(),
            image_url: String::new(),
        }
    }

    #[tokio::test]
    async fn create_returns_the_stored_product() {
        let svc = ProductCommandService::new(Arc::new(InMemoryRepo::default()));

        let res = svc.create(&create_req("keyboard", 4500, 12)).await.unwrap();

        assert_eq!(res.data.name, "keyboard");
        assert_eq!(res.data.price, 4500);
        assert_eq!(res.data.stock, 12);
    }

    #[tokio::test]
    async fn create_rejects_negative_price() {
        let svc = ProductCommandService::new(Arc::new(InMemoryRepo::default()));

        let err = svc.create(&create_req("keyboard", -1, 1)).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn update_unknown_product_maps_to_not_found() {
        let svc = ProductCommandService::new(Arc::new(InMemoryRepo::default()));

        let err = svc
            .update(&UpdateProductRequest {
                product_id: 42,
                name: "keyboard".to_string(),
                description: String::new(),
                price: 4500,
                stock: 12,
                category: String::new(),
                image_url: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
