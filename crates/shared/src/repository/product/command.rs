use crate::{
    abstract_trait::product::repository::command::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::product::ProductModel,
};
use async_trait::async_trait;
use sqlx::{Row, postgres::PgRow};
use tracing::error;

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
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

    fn map_row(row: &PgRow) -> Result<ProductModel, sqlx::Error> {
        Ok(ProductModel {
            product_id: row.try_get("product_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            stock: row.try_get("stock")?,
            category: row.try_get("category")?,
            image_url: row.try_get("image_url")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            INSERT INTO products (name, description, price, stock, category, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *;
        "#;

        let row = sqlx::query(sql)
            .bind(&req.name)
            .bind(&req.description)
            .bind(req.price)
            .bind(req.stock)
            .bind(&req.category)
            .bind(&req.image_url)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in create product: {e:?}");
                RepositoryError::from(e)
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }

    async fn update(&self, req: &UpdateProductRequest) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                stock = $5,
                category = $6,
                image_url = $7,
                updated_at = CURRENT_TIMESTAMP
            WHERE product_id = $1
            RETURNING *;
        "#;

        let row = sqlx::query(sql)
            .bind(req.product_id)
            .bind(&req.name)
            .bind(&req.description)
            .bind(req.price)
            .bind(req.stock)
            .bind(&req.category)
            .bind(&req.image_url)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in update product: {e:?}");
                match e {
                    sqlx::Error::RowNotFound => RepositoryError::NotFound,
                    _ => RepositoryError::from(e),
                }
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }
}
