use crate::{
    abstract_trait::customer::{
        repository::command::DynCustomerCommandRepository,
        service::command::CustomerCommandServiceTrait,
    },
    domain::{
        requests::customer::{
            CreateCustomerRequest, DeleteCustomerRequest, UpdateCustomerRequest,
        },
        responses::{ApiResponse, CustomerResponse},
    },
    errors::{ServiceError, collect_validation_errors},
    utils::mask_phone,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct CustomerCommandService {
    pub command: DynCustomerCommandRepository,
}

impl CustomerCommandService {
    pub fn new(command: DynCustomerCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl CustomerCommandServiceTrait for CustomerCommandService {
    async fn create(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        info!(
            "👤 Creating customer {} ({}) for user {}",
            req.name,
            mask_phone(&req.phone),
            req.user_id
        );

        let customer = self.command.create(req).await.map_err(|e| {
            error!("❌ Failed to create customer: {e:?}");
            ServiceError::from(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Customer created successfully".to_string(),
            data: CustomerResponse::from(customer),
        })
    }

    async fn update(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        info!("👤 Updating customer id {}", req.customer_id);

        let customer = self.command.update(req).await.map_err(|e| {
            error!("❌ Failed to update customer {}: {e:?}", req.customer_id);
            ServiceError::from(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Customer updated successfully".to_string(),
            data: CustomerResponse::from(customer),
        })
    }

    async fn delete(
        &self,
        req: &DeleteCustomerRequest,
    ) -> Result<ApiResponse<bool>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        info!("🗑️ Deleting customer id {}", req.customer_id);

        self.command.delete(req.customer_id).await.map_err(|e| {
            error!("❌ Failed to delete customer {}: {e:?}", req.customer_id);
            ServiceError::from(e)
        })?;

        info!("✅ Customer {} deleted", req.customer_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Customer deleted successfully".to_string(),
            data: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::customer::repository::command::CustomerCommandRepositoryTrait,
        errors::RepositoryError, model::customer::CustomerModel,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryRepo {
        rows: Mutex<Vec<CustomerModel>>,
    }

    #[async_trait]
    impl CustomerCommandRepositoryTrait for InMemoryRepo {
        async fn create(
            &self,
            req: &CreateCustomerRequest,
        ) -> Result<CustomerModel, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let model = CustomerModel {
                customer_id: rows.len() as i32 + 1,
                name: req.name.clone(),
                phone: req.phone.clone(),
                user_id: req.user_id,
                authority_id: req.authority_id,
                created_at: None,
                updated_at: None,
            };
            rows.push(model.clone());
            Ok(model)
        }

        async fn update(
            &self,
            req: &UpdateCustomerRequest,
        ) -> Result<CustomerModel, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|c| c.customer_id == req.customer_id)
                .ok_or(RepositoryError::NotFound)?;
            row.name = req.name.clone();
            row.phone = req.phone.clone();
            Ok(row.clone())
        }

        async fn delete(&self, customer_id: i32) -> Result<(), RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|c| c.customer_id != customer_id);
            if rows.len() == before {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        }
    }

    fn create_req() -> CreateCustomerRequest {
        CreateCustomerRequest {
            name: "Li Ming".to_string(),
            phone: "13812345678".to_string(),
            user_id: 7,
            authority_id: 888,
        }
    }

    #[tokio::test]
    async fn create_requires_phone() {
        let svc = CustomerCommandService::new(Arc::new(InMemoryRepo::default()));

        let mut req = create_req();
        req.phone = String::new();

        let err = svc.create(&req).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn create_then_delete_round_trip() {
        let repo = Arc::new(InMemoryRepo::default());
        let svc = CustomerCommandService::new(repo);

        let created = svc.create(&create_req()).await.unwrap();
        let deleted = svc
            .delete(&DeleteCustomerRequest {
                customer_id: created.data.id,
            })
            .await
            .unwrap();

        assert!(deleted.data);
    }

    #[tokio::test]
    async fn delete_unknown_customer_maps_to_not_found() {
        let svc = CustomerCommandService::new(Arc::new(InMemoryRepo::default()));

        let err = svc
            .delete(&DeleteCustomerRequest { customer_id: 5 })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
