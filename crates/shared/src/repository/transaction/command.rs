use crate::{
    abstract_trait::transaction::repository::command::TransactionCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::transaction::InsertTransaction,
    errors::RepositoryError, model::transaction::TransactionModel,
};
use async_trait::async_trait;
use sqlx::{Row, postgres::PgRow};
use tracing::error;

pub struct TransactionCommandRepository {
    db: ConnectionPool,
}

impl TransactionCommandRepository {
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
impl TransactionCommandRepositoryTrait for TransactionCommandRepository {
    async fn create(&self, req: &InsertTransaction) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            INSERT INTO transactions (order_id, user_id, product_id, amount, status, payment_method, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *;
        "#;

        let row = sqlx::query(sql)
            .bind(&req.order_id)
            .bind(req.user_id)
            .bind(req.product_id)
            .bind(req.amount)
            .bind(&req.status)
            .bind(&req.payment_method)
            .bind(&req.description)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in create transaction: {e:?}");
                RepositoryError::from(e)
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }

    async fn update_status(
        &self,
        order_id: &str,
        status: &str,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            UPDATE transactions
            SET status = $2, updated_at = CURRENT_TIMESTAMP
            WHERE order_id = $1
            RETURNING *;
        "#;

        let row = sqlx::query(sql)
            .bind(order_id)
            .bind(status)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in update transaction status: {e:?}");
                match e {
                    sqlx::Error::RowNotFound => RepositoryError::NotFound,
                    _ => RepositoryError::from(e),
                }
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }
}
