use crate::{
    abstract_trait::product::repository::query::ProductQueryRepositoryTrait,
    config::ConnectionPool, domain::requests::product::FindAllProducts, errors::RepositoryError,
    model::product::ProductModel, utils::non_empty,
};
use async_trait::async_trait;
use sqlx::{Row, postgres::PgRow};
use tracing::error;

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
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
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                product_id,
                name,
                description,
                price,
                stock,
                category,
                image_url,
                created_at,
                updated_at,
                COUNT(*) OVER() AS total_count
            FROM products
            WHERE ($1::TEXT IS NULL OR name = $1)
              AND ($2::TEXT IS NULL OR category = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4;
        "#;

        let rows = sqlx::query(sql)
            .bind(non_empty(&req.name))
            .bind(non_empty(&req.category))
            .bind(req.page.limit())
            .bind(req.page.offset())
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_all products: {e:?}");
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
                error!("Failed to map product rows: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok((data, total))
    }

    async fn find_by_id(&self, product_id: i32) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT *
            FROM products
            WHERE product_id = $1;
        "#;

        let row = sqlx::query(sql)
            .bind(product_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("Product not found or database error: {e:?}");
                match e {
                    sqlx::Error::RowNotFound => RepositoryError::NotFound,
                    _ => RepositoryError::Sqlx(e),
                }
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }
}
