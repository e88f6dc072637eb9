use crate::{
    abstract_trait::{
        payment::{client::DynAlipayClient, service::AlipayServiceTrait},
        transaction::repository::query::DynTransactionQueryRepository,
    },
    domain::{
        requests::payment::CreateAlipayPaymentRequest,
        responses::{AlipayCreateResponse, ApiResponse, PaymentStatusResponse},
    },
    errors::{ServiceError, collect_validation_errors},
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

/// Thin orchestration in front of the gateway client: the order must exist
/// locally before a trade is opened for it.
pub struct AlipayService {
    pub client: DynAlipayClient,
    pub transaction_query: DynTransactionQueryRepository,
}

impl AlipayService {
    pub fn new(client: DynAlipayClient, transaction_query: DynTransactionQueryRepository) -> Self {
        Self {
            client,
            transaction_query,
        }
    }
}

#[async_trait]
impl AlipayServiceTrait for AlipayService {
    async fn create_payment(
        &self,
        req: &CreateAlipayPaymentRequest,
    ) -> Result<ApiResponse<AlipayCreateResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        let transaction = self
            .transaction_query
            .find_by_order_id(&req.order_id)
            .await
            .map_err(|e| {
                error!("❌ Unknown order {} for alipay create: {e:?}", req.order_id);
                ServiceError::from(e)
            })?;

        if req.amount != transaction.amount {
            return Err(ServiceError::InvalidArgument(format!(
                "amount {} does not match transaction amount {}",
                req.amount, transaction.amount
            )));
        }

        info!("💰 Opening alipay trade for order {}", req.order_id);

        let qr_code = self
            .client
            .trade_precreate(&req.order_id, req.amount, &req.subject)
            .await?;

        info!("✅ Alipay trade opened for order {}", req.order_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Alipay payment created successfully".to_string(),
            data: AlipayCreateResponse {
                qr_code,
                order_id: req.order_id.clone(),
            },
        })
    }

    async fn query_status(
        &self,
        order_id: &str,
    ) -> Result<ApiResponse<PaymentStatusResponse>, ServiceError> {
        if order_id.trim().is_empty() {
            return Err(ServiceError::InvalidArgument(
                "order_id is required".to_string(),
            ));
        }

        info!("🔍 Querying alipay trade status for order {order_id}");

        let status = self.client.trade_query(order_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Alipay trade status retrieved successfully".to_string(),
            data: PaymentStatusResponse {
                order_id: order_id.to_string(),
                status,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            payment::client::AlipayClientTrait,
            transaction::repository::query::TransactionQueryRepositoryTrait,
        },
        domain::requests::transaction::FindAllTransactions,
        errors::RepositoryError,
        model::transaction::TransactionModel,
    };
    use std::sync::Arc;

    struct StubClient;

    #[async_trait]
    impl AlipayClientTrait for StubClient {
        async fn trade_precreate(
            &self,
            order_id: &str,
            _amount: i64,
            _subject: &str,
        ) -> Result<String, ServiceError> {
            Ok(format!("qr://{order_id}"))
        }

        async fn trade_query(&self, _order_id: &str) -> Result<String, ServiceError> {
            Ok("TRADE_SUCCESS".to_string())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl AlipayClientTrait for FailingClient {
        async fn trade_precreate(
            &self,
            _order_id: &str,
            _amount: i64,
            _subject: &str,
        ) -> Result<String, ServiceError> {
            Err(ServiceError::Gateway("connection refused".to_string()))
        }

        async fn trade_query(&self, _order_id: &str) -> Result<String, ServiceError> {
            Err(ServiceError::Gateway("connection refused".to_string()))
        }
    }

    struct StubTransactions {
        rows: Vec<TransactionModel>,
    }

    #[async_trait]
    impl TransactionQueryRepositoryTrait for StubTransactions {
        async fn find_all(
            &self,
            _req: &FindAllTransactions,
        ) -> Result<(Vec<TransactionModel>, i64), RepositoryError> {
            Ok((self.rows.clone(), self.rows.len() as i64))
        }

        async fn find_by_id(
            &self,
            _transaction_id: i32,
        ) -> Result<TransactionModel, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn find_by_order_id(
            &self,
            order_id: &str,
        ) -> Result<TransactionModel, RepositoryError> {
            self.rows
                .iter()
                .find(|t| t.order_id == order_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }
    }

    fn transaction(order_id: &str, amount: i64) -> TransactionModel {
        TransactionModel {
            transaction_id: 1,
            order_id: order_id.to_string(),
            user_id: 7,
            product_id: 3,
            amount,
            status: "pending".to_string(),
            payment_method: "alipay".to_string(),
            description: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn create_req(order_id: &str, amount: i64) -> CreateAlipayPaymentRequest {
        CreateAlipayPaymentRequest {
            order_id: order_id.to_string(),
            amount,
            subject: "Order payment".to_string(),
        }
    }

    #[tokio::test]
    async fn create_payment_returns_qr_code() {
        let svc = AlipayService::new(
            Arc::new(StubClient),
            Arc::new(StubTransactions {
                rows: vec![transaction("ORD-1", 500)],
            }),
        );

        let res = svc.create_payment(&create_req("ORD-1", 500)).await.unwrap();

        assert_eq!(res.data.qr_code, "qr://ORD-1");
        assert_eq!(res.data.order_id, "ORD-1");
    }

    #[tokio::test]
    async fn create_payment_requires_a_known_order() {
        let svc = AlipayService::new(
            Arc::new(StubClient),
            Arc::new(StubTransactions { rows: vec![] }),
        );

        let err = svc.create_payment(&create_req("ORD-1", 500)).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn create_payment_rejects_mismatched_amount() {
        let svc = AlipayService::new(
            Arc::new(StubClient),
            Arc::new(StubTransactions {
                rows: vec![transaction("ORD-1", 500)],
            }),
        );

        let err = svc.create_payment(&create_req("ORD-1", 400)).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn gateway_failure_surfaces_as_gateway_error() {
        let svc = AlipayService::new(
            Arc::new(FailingClient),
            Arc::new(StubTransactions {
                rows: vec![transaction("ORD-1", 500)],
            }),
        );

        let err = svc.create_payment(&create_req("ORD-1", 500)).await.unwrap_err();

        assert!(matches!(err, ServiceError::Gateway(_)));
    }

    #[tokio::test]
    async fn query_status_passes_through_gateway_status() {
        let svc = AlipayService::new(
            Arc::new(StubClient),
            Arc::new(StubTransactions { rows: vec![] }),
        );

        let res = svc.query_status("ORD-1").await.unwrap();

        assert_eq!(res.data.status, "TRADE_SUCCESS");
    }
}
