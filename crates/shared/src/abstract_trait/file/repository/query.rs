use crate::{
    domain::requests::file::FindAllFiles,
    errors::RepositoryError,
    model::file::{FileChunkModel, FileModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynFileQueryRepository = Arc<dyn FileQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait FileQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllFiles)
    -> Result<(Vec<FileModel>, i64), RepositoryError>;

    /// A finished record for this key means the content is already stored;
    /// used for the instant-upload path.
    async fn find_finished_by_key(&self, key: &str)
    -> Result<Option<FileModel>, RepositoryError>;

    async fn find_by_key_and_name(
        &self,
        key: &str,
        name: &str,
    ) -> Result<Option<FileModel>, RepositoryError>;

    async fn find_by_key(&self, key: &str) -> Result<FileModel, RepositoryError>;

    async fn find_chunks(&self, file_id: i32) -> Result<Vec<FileChunkModel>, RepositoryError>;
}
