use crate::{
    domain::requests::file::{CreateFileChunkRequest, FindOrCreateFileRequest, FinishFileRequest},
    domain::responses::{ApiResponse, FileChunkResponse, FileResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynFileCommandService = Arc<dyn FileCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait FileCommandServiceTrait {
    async fn find_or_create(
        &self,
        req: &FindOrCreateFileRequest,
    ) -> Result<ApiResponse<FileResponse>, ServiceError>;

    async fn create_chunk(
        &self,
        req: &CreateFileChunkRequest,
    ) -> Result<ApiResponse<FileChunkResponse>, ServiceError>;

    async fn finish(
        &self,
        req: &FinishFileRequest,
    ) -> Result<ApiResponse<FileResponse>, ServiceError>;
}
