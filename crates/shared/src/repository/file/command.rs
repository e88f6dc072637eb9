use crate::{
    abstract_trait::file::repository::command::FileCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::file::{CreateFileChunkRequest, InsertFile},
    errors::RepositoryError,
    model::file::{FileChunkModel, FileModel},
};
use async_trait::async_trait;
use sqlx::{Row, postgres::PgRow};
use tracing::error;

pub struct FileCommandRepository {
    db: ConnectionPool,
}

impl FileCommandRepository {
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

    fn map_row(row: &PgRow) -> Result<FileModel, sqlx::Error> {
        Ok(FileModel {
            file_id: row.try_get("file_id")?,
            name: row.try_get("name")?,
            url: row.try_get("url")?,
            tag: row.try_get("tag")?,
            key: row.try_get("key")?,
            chunk_total: row.try_get("chunk_total")?,
            is_finish: row.try_get("is_finish")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl FileCommandRepositoryTrait for FileCommandRepository {
    async fn create_file(&self, req: &InsertFile) -> Result<FileModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            INSERT INTO files (name, url, tag, key, chunk_total, is_finish)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *;
        "#;

        let row = sqlx::query(sql)
            .bind(&req.name)
            .bind(&req.url)
            .bind(&req.tag)
            .bind(&req.key)
            .bind(req.chunk_total)
            .bind(req.is_finish)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in create_file: {e:?}");
                RepositoryError::from(e)
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }

    async fn create_chunk(
        &self,
        req: &CreateFileChunkRequest,
    ) -> Result<FileChunkModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            INSERT INTO file_chunks (file_id, chunk_number, chunk_path)
            VALUES ($1, $2, $3)
            RETURNING *;
        "#;

        let row = sqlx::query(sql)
            .bind(req.file_id)
            .bind(req.chunk_number)
            .bind(&req.chunk_path)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in create_chunk: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(FileChunkModel {
            chunk_id: row.try_get("chunk_id")?,
            file_id: row.try_get("file_id")?,
            chunk_number: row.try_get("chunk_number")?,
            chunk_path: row.try_get("chunk_path")?,
            created_at: row.try_get("created_at")?,
        })
    }

    async fn finish_file(&self, key: &str, url: &str) -> Result<FileModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            UPDATE files
            SET is_finish = TRUE, url = $2, updated_at = CURRENT_TIMESTAMP
            WHERE key = $1
            RETURNING *;
        "#;

        let row = sqlx::query(sql)
            .bind(key)
            .bind(url)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in finish_file: {e:?}");
                match e {
                    sqlx::Error::RowNotFound => RepositoryError::NotFound,
                    _ => RepositoryError::from(e),
                }
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }

    async fn delete_chunks(&self, file_id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            DELETE FROM file_chunks
            WHERE file_id = $1;
        "#;

        let result = sqlx::query(sql)
            .bind(file_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in delete_chunks: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }
}
