use crate::{
    domain::requests::file::{CreateFileChunkRequest, InsertFile},
    errors::RepositoryError,
    model::file::{FileChunkModel, FileModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynFileCommandRepository = Arc<dyn FileCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait FileCommandRepositoryTrait {
    async fn create_file(&self, req: &InsertFile) -> Result<FileModel, RepositoryError>;

    async fn create_chunk(
        &self,
        req: &CreateFileChunkRequest,
    ) -> Result<FileChunkModel, RepositoryError>;

    /// Marks the record finished with its final URL.
    async fn finish_file(&self, key: &str, url: &str) -> Result<FileModel, RepositoryError>;

    /// Deletes every chunk row of a file; returns the number removed.
    async fn delete_chunks(&self, file_id: i32) -> Result<u64, RepositoryError>;
}
