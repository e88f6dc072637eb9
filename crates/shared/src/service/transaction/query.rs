use crate::{
    abstract_trait::transaction::{
        repository::query::DynTransactionQueryRepository,
        service::query::TransactionQueryServiceTrait,
    },
    domain::{
        requests::transaction::FindAllTransactions,
        responses::{
            ApiResponse, ApiResponsePagination, Pagination, PaymentStatusResponse,
            TransactionResponse,
        },
    },
    errors::{ServiceError, collect_validation_errors},
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct TransactionQueryService {
    pub query: DynTransactionQueryRepository,
}

impl TransactionQueryService {
    pub fn new(query: DynTransactionQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl TransactionQueryServiceTrait for TransactionQueryService {
    async fn find_all(
        &self,
        req: &FindAllTransactions,
    ) -> Result<ApiResponsePagination<Vec<TransactionResponse>>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        info!(
            "🔍 Searching transactions | Page: {}, Size: {}",
            req.page.page, req.page.page_size
        );

        let (transactions, total_items) = self.query.find_all(req).await.map_err(|e| {
            error!("❌ Failed to fetch transactions: {e:?}");
            ServiceError::from(e)
        })?;

        let total_pages = (total_items as f64 / req.page.page_size as f64).ceil() as i32;

        info!(
            "✅ Found {} transactions (total: {total_items})",
            transactions.len()
        );

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Transactions retrieved successfully".to_string(),
            data: transactions
                .into_iter()
                .map(TransactionResponse::from)
                .collect(),
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
        transaction_id: i32,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        info!("🔍 Fetching transaction id {transaction_id}");

        let transaction = self.query.find_by_id(transaction_id).await.map_err(|e| {
            error!("❌ Failed to fetch transaction {transaction_id}: {e:?}");
            ServiceError::from(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Transaction retrieved successfully".to_string(),
            data: TransactionResponse::from(transaction),
        })
    }

    async fn get_status(
        &self,
        order_id: &str,
    ) -> Result<ApiResponse<PaymentStatusResponse>, ServiceError> {
        if order_id.trim().is_empty() {
            return Err(ServiceError::InvalidArgument(
                "order_id is required".to_string(),
            ));
        }

        info!("🔍 Fetching payment status for order {order_id}");

        let transaction = self.query.find_by_order_id(order_id).await.map_err(|e| {
            error!("❌ Failed to fetch status for order {order_id}: {e:?}");
            ServiceError::from(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Payment status retrieved successfully".to_string(),
            data: PaymentStatusResponse {
                order_id: transaction.order_id,
                status: transaction.status,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::transaction::repository::query::TransactionQueryRepositoryTrait,
        domain::requests::pagination::PageRequest, errors::RepositoryError,
        model::transaction::TransactionModel,
    };
    use std::sync::Arc;

    fn sample(id: i32, order_id: &str, status: &str) -> TransactionModel {
        TransactionModel {
            transaction_id: id,
            order_id: order_id.to_string(),
            user_id: 7,
            product_id: 3,
            amount: 1500,
            status: status.to_string(),
            payment_method: "alipay".to_string(),
            description: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    struct StubQueryRepo {
        rows: Vec<TransactionModel>,
        total: i64,
    }

    #[async_trait]
    impl TransactionQueryRepositoryTrait for StubQueryRepo {
        async fn find_all(
            &self,
            _req: &FindAllTransactions,
        ) -> Result<(Vec<TransactionModel>, i64), RepositoryError> {
            Ok((self.rows.clone(), self.total))
        }

        async fn find_by_id(
            &self,
            transaction_id: i32,
        ) -> Result<TransactionModel, RepositoryError> {
            self.rows
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
                .iter()
                .find(|t| t.order_id == order_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }
    }

    fn service(rows: Vec<TransactionModel>, total: i64) -> TransactionQueryService {
        TransactionQueryService::new(Arc::new(StubQueryRepo { rows, total }))
    }

    fn find_all_req(page: i32, page_size: i32) -> FindAllTransactions {
        FindAllTransactions {
            order_id: String::new(),
            user_id: 0,
            status: String::new(),
            payment_method: String::new(),
            page: PageRequest { page, page_size },
        }
    }

    #[tokio::test]
    async fn find_all_reports_consistent_pagination() {
        let svc = service(vec![sample(1, "ORD-1-000001", "pending")], 21);

        let res = svc.find_all(&find_all_req(1, 10)).await.unwrap();

        assert_eq!(res.data.len(), 1);
        assert_eq!(res.pagination.total_items, 21);
        assert_eq!(res.pagination.total_pages, 3);
        assert_eq!(res.pagination.page, 1);
    }

    #[tokio::test]
    async fn find_all_rejects_zero_page() {
        let svc = service(vec![], 0);

        let err = svc.find_all(&find_all_req(0, 10)).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn find_all_rejects_zero_page_size() {
        let svc = service(vec![], 0);

        let err = svc.find_all(&find_all_req(1, 0)).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn find_by_id_maps_not_found() {
        let svc = service(vec![], 0);

        let err = svc.find_by_id(99).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn get_status_returns_stored_status() {
        let svc = service(vec![sample(1, "ORD-1-000001", "processing")], 1);

        let res = svc.get_status("ORD-1-000001").await.unwrap();

        assert_eq!(res.data.status, "processing");
        assert_eq!(res.data.order_id, "ORD-1-000001");
    }

    #[tokio::test]
    async fn get_status_rejects_blank_order_id() {
        let svc = service(vec![], 0);

        let err = svc.get_status("  ").await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }
}
