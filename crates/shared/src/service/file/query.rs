use crate::{
    abstract_trait::file::{
        repository::query::DynFileQueryRepository, service::query::FileQueryServiceTrait,
    },
    domain::{
        requests::file::FindAllFiles,
        responses::{ApiResponsePagination, FileResponse, Pagination},
    },
    errors::{ServiceError, collect_validation_errors},
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct FileQueryService {
    pub query: DynFileQueryRepository,
}

impl FileQueryService {
    pub fn new(query: DynFileQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl FileQueryServiceTrait for FileQueryService {
    async fn find_all(
        &self,
        req: &FindAllFiles,
    ) -> Result<ApiResponsePagination<Vec<FileResponse>>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        info!(
            "🔍 Searching files | Page: {}, Size: {}",
            req.page.page, req.page.page_size
        );

        let (files, total_items) = self.query.find_all(req).await.map_err(|e| {
            error!("❌ Failed to fetch files: {e:?}");
            ServiceError::from(e)
        })?;

        let total_pages = (total_items as f64 / req.page.page_size as f64).ceil() as i32;

        info!("✅ Found {} files (total: {total_items})", files.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Files retrieved successfully".to_string(),
            data: files.into_iter().map(FileResponse::from).collect(),
            pagination: Pagination {
                page: req.page.page,
                page_size: req.page.page_size,
                total_items,
                total_pages,
            },
        })
    }
}
