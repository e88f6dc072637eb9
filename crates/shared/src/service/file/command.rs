use crate::{
    abstract_trait::file::{
        repository::{command::DynFileCommandRepository, query::DynFileQueryRepository},
        service::command::FileCommandServiceTrait,
    },
    domain::{
        requests::file::{
            CreateFileChunkRequest, FindOrCreateFileRequest, FinishFileRequest, InsertFile,
        },
        responses::{ApiResponse, FileChunkResponse, FileResponse},
    },
    errors::{ServiceError, collect_validation_errors},
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct FileCommandService {
    pub command: DynFileCommandRepository,
    pub query: DynFileQueryRepository,
}

impl FileCommandService {
    pub fn new(command: DynFileCommandRepository, query: DynFileQueryRepository) -> Self {
        Self { command, query }
    }

    /// Lowercased extension of the file name, or "url" when there is none.
    fn tag_from_name(name: &str) -> String {
        match name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
            _ => "url".to_string(),
        }
    }
}

#[async_trait]
impl FileCommandServiceTrait for FileCommandService {
    async fn find_or_create(
        &self,
        req: &FindOrCreateFileRequest,
    ) -> Result<ApiResponse<FileResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        // Instant upload: a finished record with this key means the content
        // is already stored. Insert a fresh finished row under the requested
        // name, reusing the stored URL.
        if let Some(finished) = self
            .query
            .find_finished_by_key(&req.key)
            .await
            .map_err(ServiceError::from)?
        {
            let insert = InsertFile {
                name: req.name.clone(),
                url: finished.url.clone(),
                tag: Self::tag_from_name(&req.name),
                key: req.key.clone(),
                chunk_total: req.chunk_total,
                is_finish: true,
            };

            let file = self.command.create_file(&insert).await.map_err(|e| {
                error!("❌ Failed to record instant upload for key {}: {e:?}", req.key);
                ServiceError::from(e)
            })?;

            info!("⚡ Instant upload hit for key {}", req.key);
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "File already uploaded".to_string(),
                data: FileResponse::from(file),
            });
        }

        // Resume: an unfinished record for this key and name returns the
        // chunks uploaded so far.
        if let Some(existing) = self
            .query
            .find_by_key_and_name(&req.key, &req.name)
            .await
            .map_err(ServiceError::from)?
        {
            let chunks = self
                .query
                .find_chunks(existing.file_id)
                .await
                .map_err(ServiceError::from)?;

            info!(
                "🔁 Resuming upload for key {} ({} chunks present)",
                req.key,
                chunks.len()
            );

            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Upload resumed".to_string(),
                data: FileResponse::with_chunks(existing, chunks),
            });
        }

        let insert = InsertFile {
            name: req.name.clone(),
            url: String::new(),
            tag: Self::tag_from_name(&req.name),
            key: req.key.clone(),
            chunk_total: req.chunk_total,
            is_finish: false,
        };

        let file = self.command.create_file(&insert).await.map_err(|e| {
            error!("❌ Failed to create file record: {e:?}");
            ServiceError::from(e)
        })?;

        info!(
            "📄 Created file record {} for key {} ({} chunks expected)",
            file.file_id, file.key, file.chunk_total
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "File record created successfully".to_string(),
            data: FileResponse::from(file),
        })
    }

    async fn create_chunk(
        &self,
        req: &CreateFileChunkRequest,
    ) -> Result<ApiResponse<FileChunkResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        let chunk = self.command.create_chunk(req).await.map_err(|e| {
            error!(
                "❌ Failed to record chunk {} of file {}: {e:?}",
                req.chunk_number, req.file_id
            );
            ServiceError::from(e)
        })?;

        info!(
            "🧩 Recorded chunk {} of file {}",
            chunk.chunk_number, chunk.file_id
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "File chunk recorded successfully".to_string(),
            data: FileChunkResponse::from(chunk),
        })
    }

    async fn finish(
        &self,
        req: &FinishFileRequest,
    ) -> Result<ApiResponse<FileResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(collect_validation_errors(&e)))?;

        let file = self.query.find_by_key(&req.key).await.map_err(|e| {
            error!("❌ Failed to load file for key {}: {e:?}", req.key);
            ServiceError::from(e)
        })?;

        // Flip the record first; chunk rows stay usable for a resume if the
        // update fails.
        let finished = self
            .command
            .finish_file(&req.key, &req.url)
            .await
            .map_err(|e| {
                error!("❌ Failed to finish file for key {}: {e:?}", req.key);
                ServiceError::from(e)
            })?;

        let removed = self
            .command
            .delete_chunks(file.file_id)
            .await
            .map_err(ServiceError::from)?;

        info!(
            "✅ Finished file {} for key {} ({removed} chunk rows removed)",
            finished.file_id, req.key
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "File marked as finished".to_string(),
            data: FileResponse::from(finished),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::file::repository::{
            command::FileCommandRepositoryTrait, query::FileQueryRepositoryTrait,
        },
        domain::requests::file::FindAllFiles,
        errors::RepositoryError,
        model::file::{FileChunkModel, FileModel},
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryRepo {
        files: Mutex<Vec<FileModel>>,
        chunks: Mutex<Vec<FileChunkModel>>,
        fail_finish: Mutex<bool>,
    }

    #[async_trait]
    impl FileQueryRepositoryTrait for InMemoryRepo {
        async fn find_all(
            &self,
            _req: &FindAllFiles,
        ) -> Result<(Vec<FileModel>, i64), RepositoryError> {
            let files = self.files.lock().unwrap();
            Ok((files.clone(), files.len() as i64))
        }

        async fn find_finished_by_key(
            &self,
            key: &str,
        ) -> Result<Option<FileModel>, RepositoryError> {
            Ok(self
                .files
                .lock()
                .unwrap()
                .iter()
                .find(|f| f.key == key && f.is_finish)
                .cloned())
        }

        async fn find_by_key_and_name(
            &self,
            key: &str,
            name: &str,
        ) -> Result<Option<FileModel>, RepositoryError> {
            Ok(self
                .files
                .lock()
                .unwrap()
                .iter()
                .find(|f| f.key == key && f.name == name)
                .cloned())
        }

        async fn find_by_key(&self, key: &str) -> Result<FileModel, RepositoryError> {
            self.files
                .lock()
                .unwrap()
                .iter()
                .find(|f| f.key == key)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        async fn find_chunks(
            &self,
            file_id: i32,
        ) -> Result<Vec<FileChunkModel>, RepositoryError> {
            Ok(self
                .chunks
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.file_id == file_id)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl FileCommandRepositoryTrait for InMemoryRepo {
        async fn create_file(&self, req: &InsertFile) -> Result<FileModel, RepositoryError> {
            let mut files = self.files.lock().unwrap();
            let model = FileModel {
                file_id: files.len() as i32 + 1,
                name: req.name.clone(),
                url: req.url.clone(),
                tag: req.tag.clone(),
                key: req.key.clone(),
                chunk_total: req.chunk_total,
                is_finish: req.is_finish,
                created_at: None,
                updated_at: None,
            };
            files.push(model.clone());
            Ok(model)
        }

        async fn create_chunk(
            &self,
            req: &CreateFileChunkRequest,
        ) -> Result<FileChunkModel, RepositoryError> {
            let mut chunks = self.chunks.lock().unwrap();
            let model = FileChunkModel {
                chunk_id: chunks.len() as i32 + 1,
                file_id: req.file_id,
                chunk_number: req.chunk_number,
                chunk_path: req.chunk_path.clone(),
                created_at: None,
            };
            chunks.push(model.clone());
            Ok(model)
        }

        async fn finish_file(&self, key: &str, url: &str) -> Result<FileModel, RepositoryError> {
            if *self.fail_finish.lock().unwrap() {
                return Err(RepositoryError::Custom("update failed".to_string()));
            }
            let mut files = self.files.lock().unwrap();
            let file = files
                .iter_mut()
                .find(|f| f.key == key)
                .ok_or(RepositoryError::NotFound)?;
            file.is_finish = true;
            file.url = url.to_string();
            Ok(file.clone())
        }

        async fn delete_chunks(&self, file_id: i32) -> Result<u64, RepositoryError> {
            let mut chunks = self.chunks.lock().unwrap();
            let before = chunks.len();
            chunks.retain(|c| c.file_id != file_id);
            Ok((before - chunks.len()) as u64)
        }
    }

    fn service() -> (Arc<InMemoryRepo>, FileCommandService) {
        let repo = Arc::new(InMemoryRepo::default());
        (repo.clone(), FileCommandService::new(repo.clone(), repo))
    }

    fn find_req(key: &str, name: &str, chunk_total: i32) -> FindOrCreateFileRequest {
        FindOrCreateFileRequest {
            key: key.to_string(),
            name: name.to_string(),
            chunk_total,
        }
    }

    #[tokio::test]
    async fn first_call_creates_an_unfinished_record() {
        let (_, svc) = service();

        let res = svc.find_or_create(&find_req("abc123", "movie.mp4", 8)).await.unwrap();

        assert!(!res.data.is_finish);
        assert_eq!(res.data.tag, "mp4");
        assert_eq!(res.data.chunk_total, 8);
        assert!(res.data.chunks.is_empty());
    }

    #[tokio::test]
    async fn finished_key_inserts_fresh_record_as_instant_upload() {
        let (repo, svc) = service();

        svc.find_or_create(&find_req("abc123", "movie.mp4", 1)).await.unwrap();
        svc.finish(&FinishFileRequest {
            key: "abc123".to_string(),
            url: "https://cdn.example.com/movie.mp4".to_string(),
        })
        .await
        .unwrap();

        // Same content uploaded under a different name gets its own
        // finished row, carrying the stored URL.
        let res = svc.find_or_create(&find_req("abc123", "copy.mp4", 1)).await.unwrap();

        assert!(res.data.is_finish);
        assert_eq!(res.message, "File already uploaded");
        assert_eq!(res.data.name, "copy.mp4");
        assert_eq!(res.data.url, "https://cdn.example.com/movie.mp4");
        assert_eq!(repo.files.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn resume_returns_chunks_already_uploaded() {
        let (_, svc) = service();

        let created = svc.find_or_create(&find_req("abc123", "movie.mp4", 3)).await.unwrap();
        svc.create_chunk(&CreateFileChunkRequest {
            file_id: created.data.id,
            chunk_number: 1,
            chunk_path: "/tmp/chunks/abc123/1".to_string(),
        })
        .await
        .unwrap();

        let resumed = svc.find_or_create(&find_req("abc123", "movie.mp4", 3)).await.unwrap();

        assert_eq!(resumed.message, "Upload resumed");
        assert_eq!(resumed.data.chunks.len(), 1);
        assert_eq!(resumed.data.chunks[0].chunk_number, 1);
    }

    #[tokio::test]
    async fn finish_deletes_chunk_rows_and_sets_url() {
        let (repo, svc) = service();

        let created = svc.find_or_create(&find_req("abc123", "movie.mp4", 2)).await.unwrap();
        for n in 1..=2 {
            svc.create_chunk(&CreateFileChunkRequest {
                file_id: created.data.id,
                chunk_number: n,
                chunk_path: format!("/tmp/chunks/abc123/{n}"),
            })
            .await
            .unwrap();
        }

        let res = svc
            .finish(&FinishFileRequest {
                key: "abc123".to_string(),
                url: "https://cdn.example.com/movie.mp4".to_string(),
            })
            .await
            .unwrap();

        assert!(res.data.is_finish);
        assert_eq!(res.data.url, "https://cdn.example.com/movie.mp4");
        assert!(repo.chunks.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_finish_keeps_chunk_rows_for_resume() {
        let (repo, svc) = service();

        let created = svc.find_or_create(&find_req("abc123", "movie.mp4", 2)).await.unwrap();
        svc.create_chunk(&CreateFileChunkRequest {
            file_id: created.data.id,
            chunk_number: 1,
            chunk_path: "/tmp/chunks/abc123/1".to_string(),
        })
        .await
        .unwrap();

        *repo.fail_finish.lock().unwrap() = true;
        let err = svc
            .finish(&FinishFileRequest {
                key: "abc123".to_string(),
                url: "https://cdn.example.com/movie.mp4".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Repo(_)));
        assert_eq!(repo.chunks.lock().unwrap().len(), 1);
        assert!(!repo.files.lock().unwrap()[0].is_finish);
    }

    #[tokio::test]
    async fn finish_unknown_key_maps_to_not_found() {
        let (_, svc) = service();

        let err = svc
            .finish(&FinishFileRequest {
                key: "missing".to_string(),
                url: "https://cdn.example.com/x".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn chunk_number_zero_fails_validation() {
        let (_, svc) = service();

        let err = svc
            .create_chunk(&CreateFileChunkRequest {
                file_id: 1,
                chunk_number: 0,
                chunk_path: "/tmp/x".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn name_without_extension_gets_url_tag() {
        let (_, svc) = service();

        let res = svc.find_or_create(&find_req("k1", "README", 1)).await.unwrap();

        assert_eq!(res.data.tag, "url");
    }
}
