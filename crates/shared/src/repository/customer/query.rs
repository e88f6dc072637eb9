use crate::{
    abstract_trait::customer::repository::query::CustomerQueryRepositoryTrait,
    config::ConnectionPool, domain::requests::customer::FindAllCustomers,
    errors::RepositoryError, model::customer::CustomerModel, utils::non_zero,
};
use async_trait::async_trait;
use sqlx::{Row, postgres::PgRow};
use tracing::error;

pub struct CustomerQueryRepository {
    db: ConnectionPool,
}

impl CustomerQueryRepository {
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

    fn map_row(row: &PgRow) -> Result<CustomerModel, sqlx::Error> {
        Ok(CustomerModel {
            customer_id: row.try_get("customer_id")?,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            user_id: row.try_get("user_id")?,
            authority_id: row.try_get("authority_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl CustomerQueryRepositoryTrait for CustomerQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllCustomers,
    ) -> Result<(Vec<CustomerModel>, i64), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                customer_id,
                name,
                phone,
                user_id,
                authority_id,
                created_at,
                updated_at,
                COUNT(*) OVER() AS total_count
            FROM customers
            WHERE ($1::INT4 IS NULL OR user_id = $1)
              AND ($2::INT4 IS NULL OR authority_id = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4;
        "#;

        let rows = sqlx::query(sql)
            .bind(non_zero(req.user_id))
            .bind(non_zero(req.authority_id))
            .bind(req.page.limit())
            .bind(req.page.offset())
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_all customers: {e:?}");
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
                error!("Failed to map customer rows: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok((data, total))
    }

    async fn find_by_id(&self, customer_id: i32) -> Result<CustomerModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT *
            FROM customers
            WHERE customer_id = $1;
        "#;

        let row = sqlx::query(sql)
            .bind(customer_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("Customer not found or database error: {e:?}");
                match e {
                    sqlx::Error::RowNotFound => RepositoryError::NotFound,
                    _ => RepositoryError::Sqlx(e),
                }
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }
}
