use crate::{
    abstract_trait::transaction::repository::query::TransactionQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::transaction::FindAllTransactions,
    errors::RepositoryError,
    model::transaction::TransactionModel,
    utils::{non_empty, non_zero},
};
use async_trait::async_trait;
use sqlx::{Row, postgres::PgRow};
use tracing::error;

pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }

    fn map_row(row: &PgRow) -> Result<TransactionModel, sqlx::Error> {
        Ok(TransactionModel {
            transaction_id: row.try_get("transaction_id")?,
            order_id: row.try_get("order_id")?,
            user_id: row.try_get("user_id")?,
            product_id: row.try_get("product_id")?,
            amount: row.try_get("amount")?,
            status: row.try_get("status")?,
            payment_method: row.try_get("payment_method")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllTransactions,
    ) -> Result<(Vec<TransactionModel>, i64), RepositoryError> {
        let mut conn = self.get_conn().await?;

        // Filters apply in a fixed order; a NULL bind leaves its predicate
        // inert so an absent filter never narrows the result.
        let sql = r#"
            SELECT
                transaction_id,
                order_id,
                user_id,
                product_id,
                amount,
                status,
                payment_method,
                description,
                created_at,
                updated_at,
                COUNT(*) OVER() AS total_count
            FROM transactions
            WHERE ($1::TEXT IS NULL OR order_id = $1)
              AND ($2::INT4 IS NULL OR user_id = $2)
              AND ($3::TEXT IS NULL OR status = $3)
              AND ($4::TEXT IS NULL OR payment_method = $4)
            ORDER BY created_at DESC
            LIMIT $5 OFFSET $6;
        "#;

        let rows = sqlx::query(sql)
            .bind(non_empty(&req.order_id))
            .bind(non_zero(req.user_id))
            .bind(non_empty(&req.status))
            .bind(non_empty(&req.payment_method))
            .bind(req.page.limit())
            .bind(req.page.offset())
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_all transactions: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        let total = rows
            .first()
            .and_then(|r| r.try_get::<i64, _>("total_count").ok())
            .unwrap_or(0);

        let data = rows
            .iter()
            .map(Self::map_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| {
                error!("Failed to map transaction rows: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok((data, total))
    }

    async fn find_by_id(&self, transaction_id: i32) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT *
            FROM transactions
            WHERE transaction_id = $1;
        "#;

        let row = sqlx::query(sql)
            .bind(transaction_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("Transaction not found or database error: {e:?}");
                match e {
                    sqlx::Error::RowNotFound => RepositoryError::NotFound,
                    _ => RepositoryError::Sqlx(e),
                }
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }

    async fn find_by_order_id(&self, order_id: &str) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT *
            FROM transactions
            WHERE order_id = $1;
        "#;

        let row = sqlx::query(sql)
            .bind(order_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("Transaction not found or database error: {e:?}");
                match e {
                    sqlx::Error::RowNotFound => RepositoryError::NotFound,
                    _ => RepositoryError::Sqlx(e),
                }
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }
}
