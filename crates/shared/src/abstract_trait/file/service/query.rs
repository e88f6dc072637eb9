use crate::{
    domain::requests::file::FindAllFiles,
    domain::responses::{ApiResponsePagination, FileResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynFileQueryService = Arc<dyn FileQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait FileQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllFiles,
    ) -> Result<ApiResponsePagination<Vec<FileResponse>>, ServiceError>;
}
