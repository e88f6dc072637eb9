use crate::{
    abstract_trait::transaction::{
        repository::{
            command::DynTransactionCommandRepository, query::DynTransactionQueryRepository,
        },
        service::command::TransactionCommandServiceTrait,
    },
    domain::{
        requests::transaction::{
            CreateTransactionRequest, InsertTransaction, RefundTransactionRequest,
            UpdateTransactionStatusRequest,
        },
        responses::{ApiResponse, TransactionResponse},
    },
    errors::{ServiceError, collect_validation_errors},
    model::transaction::TransactionStatus,
    utils::generate_order_id,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct TransactionCommandService {
    pub command: DynTransactionCommandRepository,
    pub query: DynTransactionQueryRepository,
}

impl TransactionCommandService {
    pub fn new(
        command: DynTransactionCommandRepository,
        query: DynTransactionQueryRepository,
    ) -> Self {
        Self { command, query }
    }

    fn parse_status(raw: &str) -> Result<TransactionStatus, ServiceError> {
        raw.parse::<TransactionStatus>()
            .map_err(ServiceError::InvalidArgument)
    }

    /// Stored statuses are written exclusively through the enum, so a row
    /// that fails to parse is data corruption, not caller error.
    fn stored_status(raw: &str) -> Result<TransactionStatus, ServiceError> {
        raw.parse::<TransactionStatus>().map_err(|e| {
            error!("❌ Corrupt status in storage: {e}");
            ServiceError::InternalServerError(e)
        })
    }
}

#[async_trait]
impl TransactionCommandServiceTrait for TransactionCommandService {
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        let order_id = generate_order_id().map_err(|e| {
            error!("❌ Failed to generate order id: {e:?}");
            ServiceError::InternalServerError("failed to generate order id".to_string())
        })?;

        info!(
            "💳 Creating transaction | Order: {order_id}, User: {}, Amount: {}",
            req.user_id, req.amount
        );

        let insert = InsertTransaction {
            order_id,
            user_id: req.user_id,
            product_id: req.product_id,
            amount: req.amount,
            status: TransactionStatus::Pending.as_str().to_string(),
            payment_method: req.payment_method.clone(),
            description: req.description.clone(),
        };

        let transaction = self.command.create(&insert).await.map_err(|e| {
            error!("❌ Failed to create transaction: {e:?}");
            ServiceError::from(e)
        })?;

        info!("✅ Transaction created: {}", transaction.order_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Transaction created successfully".to_string(),
            data: TransactionResponse::from(transaction),
        })
    }

    async fn update_status(
        &self,
        req: &UpdateTransactionStatusRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        let target = Self::parse_status(&req.status)?;

        let transaction = self.query.find_by_order_id(&req.order_id).await.map_err(|e| {
            error!("❌ Failed to load order {}: {e:?}", req.order_id);
            ServiceError::from(e)
        })?;

        let current = Self::stored_status(&transaction.status)?;

        if current == target {
            info!(
                "ℹ️ Order {} already {target}, nothing to do",
                req.order_id
            );
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Transaction status unchanged".to_string(),
                data: TransactionResponse::from(transaction),
            });
        }

        if !current.can_transition_to(target) {
            error!(
                "❌ Rejected transition {current} -> {target} for order {}",
                req.order_id
            );
            return Err(ServiceError::InvalidTransition(format!(
                "cannot move transaction from {current} to {target}"
            )));
        }

        let updated = self
            .command
            .update_status(&req.order_id, target.as_str())
            .await
            .map_err(|e| {
                error!("❌ Failed to update status for {}: {e:?}", req.order_id);
                ServiceError::from(e)
            })?;

        info!("✅ Order {} moved {current} -> {target}", req.order_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Transaction status updated successfully".to_string(),
            data: TransactionResponse::from(updated),
        })
    }

    async fn refund(
        &self,
        req: &RefundTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        let transaction = self.query.find_by_order_id(&req.order_id).await.map_err(|e| {
            error!("❌ Failed to load order {}: {e:?}", req.order_id);
            ServiceError::from(e)
        })?;

        let current = Self::stored_status(&transaction.status)?;

        if current != TransactionStatus::Completed {
            error!(
                "❌ Refund rejected for order {}: status is {current}",
                req.order_id
            );
            return Err(ServiceError::InvalidTransition(format!(
                "only completed transactions can be refunded, order is {current}"
            )));
        }

        if req.amount > transaction.amount {
            return Err(ServiceError::InvalidArgument(format!(
                "refund amount {} exceeds transaction amount {}",
                req.amount, transaction.amount
            )));
        }

        let updated = self
            .command
            .update_status(&req.order_id, TransactionStatus::Refunded.as_str())
            .await
            .map_err(|e| {
                error!("❌ Failed to refund order {}: {e:?}", req.order_id);
                ServiceError::from(e)
            })?;

        info!(
            "💸 Refunded order {} (amount: {})",
            req.order_id, req.amount
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Transaction refunded successfully".to_string(),
            data: TransactionResponse::from(updated),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::transaction::repository::{
            command::TransactionCommandRepositoryTrait, query::TransactionQueryRepositoryTrait,
        },
        domain::requests::transaction::FindAllTransactions,
        errors::RepositoryError,
        model::transaction::TransactionModel,
    };
    use std::sync::{Arc, Mutex};

    fn sample(order_id: &str, status: &str, amount: i64) -> TransactionModel {
        TransactionModel {
            transaction_id: 1,
            order_id: order_id.to_string(),
            user_id: 7,
            product_id: 3,
            amount,
            status: status.to_string(),
            payment_method: "alipay".to_string(),
            description: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[derive(Default)]
    struct InMemoryRepo {
        rows: Mutex<Vec<TransactionModel>>,
    }

    #[async_trait]
    impl TransactionQueryRepositoryTrait for InMemoryRepo {
        async fn find_all(
            &self,
            _req: &FindAllTransactions,
        ) -> Result<(Vec<TransactionModel>, i64), RepositoryError> {
            let rows = self.rows.lock().unwrap();
            Ok((rows.clone(), rows.len() as i64))
        }

        async fn find_by_id(
            &self,
            transaction_id: i32,
        ) -> Result<TransactionModel, RepositoryError> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.transaction_id == transaction_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        async fn find_by_order_id(
            &self,
            order_id: &str,
        ) -> Result<TransactionModel, RepositoryError> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.order_id == order_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }
    }

    #[async_trait]
    impl TransactionCommandRepositoryTrait for InMemoryRepo {
        async fn create(
            &self,
            req: &InsertTransaction,
        ) -> Result<TransactionModel, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let model = TransactionModel {
                transaction_id: rows.len() as i32 + 1,
                order_id: req.order_id.clone(),
                user_id: req.user_id,
                product_id: req.product_id,
                amount: req.amount,
                status: req.status.clone(),
                payment_method: req.payment_method.clone(),
                description: req.description.clone(),
                created_at: None,
                updated_at: None,
            };
            rows.push(model.clone());
            Ok(model)
        }

        async fn update_status(
            &self,
            order_id: &str,
            status: &str,
        ) -> Result<TransactionModel, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|t| t.order_id == order_id)
                .ok_or(RepositoryError::NotFound)?;
            row.status = status.to_string();
            Ok(row.clone())
        }
    }

    fn service_with(rows: Vec<TransactionModel>) -> TransactionCommandService {
        let repo = Arc::new(InMemoryRepo {
            rows: Mutex::new(rows),
        });
        TransactionCommandService::new(repo.clone(), repo)
    }

    fn create_req(amount: i64) -> CreateTransactionRequest {
        CreateTransactionRequest {
            product_id: 3,
            user_id: 7,
            amount,
            payment_method: "alipay".to_string(),
            description: "test order".to_string(),
        }
    }

    #[tokio::test]
    async fn create_starts_pending_with_generated_order_id() {
        let svc = service_with(vec![]);

        let res = svc.create(&create_req(2500)).await.unwrap();

        assert_eq!(res.data.status, "pending");
        assert!(res.data.order_id.starts_with("ORD-"));
        assert_eq!(res.data.amount, 2500);
    }

    #[tokio::test]
    async fn create_rejects_non_positive_amount() {
        let svc = service_with(vec![]);

        let err = svc.create(&create_req(0)).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn update_status_follows_the_lifecycle() {
        let svc = service_with(vec![sample("ORD-1", "pending", 100)]);

        let res = svc
            .update_status(&UpdateTransactionStatusRequest {
                order_id: "ORD-1".to_string(),
                status: "processing".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(res.data.status, "processing");
    }

    #[tokio::test]
    async fn update_status_rejects_skipping_states() {
        let svc = service_with(vec![sample("ORD-1", "pending", 100)]);

        let err = svc
            .update_status(&UpdateTransactionStatusRequest {
                order_id: "ORD-1".to_string(),
                status: "completed".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidTransition(_)));
    }

    #[tokio::test]
    async fn update_status_same_status_is_a_no_op() {
        let svc = service_with(vec![sample("ORD-1", "processing", 100)]);

        let res = svc
            .update_status(&UpdateTransactionStatusRequest {
                order_id: "ORD-1".to_string(),
                status: "processing".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(res.message, "Transaction status unchanged");
        assert_eq!(res.data.status, "processing");
    }

    #[tokio::test]
    async fn update_status_rejects_unknown_status() {
        let svc = service_with(vec![sample("ORD-1", "pending", 100)]);

        let err = svc
            .update_status(&UpdateTransactionStatusRequest {
                order_id: "ORD-1".to_string(),
                status: "shipped".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn refund_requires_completed_status() {
        let svc = service_with(vec![sample("ORD-1", "pending", 100)]);

        let err = svc
            .refund(&RefundTransactionRequest {
                order_id: "ORD-1".to_string(),
                amount: 100,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidTransition(_)));
    }

    #[tokio::test]
    async fn refund_rejects_amount_above_transaction() {
        let svc = service_with(vec![sample("ORD-1", "completed", 100)]);

        let err = svc
            .refund(&RefundTransactionRequest {
                order_id: "ORD-1".to_string(),
                amount: 101,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn refund_moves_completed_to_refunded() {
        let svc = service_with(vec![sample("ORD-1", "completed", 100)]);

        let res = svc
            .refund(&RefundTransactionRequest {
                order_id: "ORD-1".to_string(),
                amount: 100,
            })
            .await
            .unwrap();

        assert_eq!(res.data.status, "refunded");
    }
}
