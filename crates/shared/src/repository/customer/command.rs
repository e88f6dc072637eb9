use crate::{
    abstract_trait::customer::repository::command::CustomerCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    errors::RepositoryError,
    model::customer::CustomerModel,
};
use async_trait::async_trait;
use sqlx::{Row, postgres::PgRow};
use tracing::error;

pub struct CustomerCommandRepository {
    db: ConnectionPool,
}

impl CustomerCommandRepository {
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
impl CustomerCommandRepositoryTrait for CustomerCommandRepository {
    async fn create(&self, req: &CreateCustomerRequest) -> Result<CustomerModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            INSERT INTO customers (name, phone, user_id, authority_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *;
        "#;

        let row = sqlx::query(sql)
            .bind(&req.name)
            .bind(&req.phone)
            .bind(req.user_id)
            .bind(req.authority_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in create customer: {e:?}");
                RepositoryError::from(e)
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }

    async fn update(&self, req: &UpdateCustomerRequest) -> Result<CustomerModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            UPDATE customers
            SET name = $2,
                phone = $3,
                user_id = $4,
                authority_id = $5,
                updated_at = CURRENT_TIMESTAMP
            WHERE customer_id = $1
            RETURNING *;
        "#;

        let row = sqlx::query(sql)
            .bind(req.customer_id)
            .bind(&req.name)
            .bind(&req.phone)
            .bind(req.user_id)
            .bind(req.authority_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in update customer: {e:?}");
                match e {
                    sqlx::Error::RowNotFound => RepositoryError::NotFound,
                    _ => RepositoryError::from(e),
                }
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }

    async fn delete(&self, customer_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            DELETE FROM customers
            WHERE customer_id = $1;
        "#;

        let result = sqlx::query(sql)
            .bind(customer_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in delete customer: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
