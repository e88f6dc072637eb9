use crate::{
    abstract_trait::file::repository::query::FileQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::file::FindAllFiles,
    errors::RepositoryError,
    model::file::{FileChunkModel, FileModel},
    utils::non_empty,
};
use async_trait::async_trait;
use sqlx::{Row, postgres::PgRow};
use tracing::error;

pub struct FileQueryRepository {
    db: ConnectionPool,
}

impl FileQueryRepository {
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

    fn map_chunk_row(row: &PgRow) -> Result<FileChunkModel, sqlx::Error> {
        Ok(FileChunkModel {
            chunk_id: row.try_get("chunk_id")?,
            file_id: row.try_get("file_id")?,
            chunk_number: row.try_get("chunk_number")?,
            chunk_path: row.try_get("chunk_path")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl FileQueryRepositoryTrait for FileQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllFiles,
    ) -> Result<(Vec<FileModel>, i64), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                file_id,
                name,
                url,
                tag,
                key,
                chunk_total,
                is_finish,
                created_at,
                updated_at,
                COUNT(*) OVER() AS total_count
            FROM files
            WHERE ($1::TEXT IS NULL OR name = $1)
              AND ($2::TEXT IS NULL OR tag = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4;
        "#;

        let rows = sqlx::query(sql)
            .bind(non_empty(&req.name))
            .bind(non_empty(&req.tag))
            .bind(req.page.limit())
            .bind(req.page.offset())
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_all files: {e:?}");
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
                error!("Failed to map file rows: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok((data, total))
    }

    async fn find_finished_by_key(
        &self,
        key: &str,
    ) -> Result<Option<FileModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT *
            FROM files
            WHERE key = $1 AND is_finish = TRUE
            ORDER BY file_id
            LIMIT 1;
        "#;

        let row = sqlx::query(sql)
            .bind(key)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_finished_by_key: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        row.as_ref()
            .map(Self::map_row)
            .transpose()
            .map_err(RepositoryError::Sqlx)
    }

    async fn find_by_key_and_name(
        &self,
        key: &str,
        name: &str,
    ) -> Result<Option<FileModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT *
            FROM files
            WHERE key = $1 AND name = $2
            ORDER BY file_id
            LIMIT 1;
        "#;

        let row = sqlx::query(sql)
            .bind(key)
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_by_key_and_name: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        row.as_ref()
            .map(Self::map_row)
            .transpose()
            .map_err(RepositoryError::Sqlx)
    }

    async fn find_by_key(&self, key: &str) -> Result<FileModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT *
            FROM files
            WHERE key = $1
            ORDER BY file_id
            LIMIT 1;
        "#;

        let row = sqlx::query(sql)
            .bind(key)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("File not found or database error: {e:?}");
                match e {
                    sqlx::Error::RowNotFound => RepositoryError::NotFound,
                    _ => RepositoryError::Sqlx(e),
                }
            })?;

        Self::map_row(&row).map_err(RepositoryError::Sqlx)
    }

    async fn find_chunks(&self, file_id: i32) -> Result<Vec<FileChunkModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT *
            FROM file_chunks
            WHERE file_id = $1
            ORDER BY chunk_number;
        "#;

        let rows = sqlx::query(sql)
            .bind(file_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_chunks: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        rows.iter()
            .map(Self::map_chunk_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| {
                error!("Failed to map file chunk rows: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }
}
