use crate::{
    model::file::{FileChunkModel, FileModel},
    utils::format_datetime,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct FileResponse {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub tag: String,
    pub key: String,
    pub chunk_total: i32,
    pub is_finish: bool,
    /// Chunks already uploaded for an unfinished file; the resume point.
    #[serde(default)]
    pub chunks: Vec<FileChunkResponse>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct FileChunkResponse {
    pub id: i32,
    pub file_id: i32,
    pub chunk_number: i32,
    pub chunk_path: String,
}

impl From<FileModel> for FileResponse {
    fn from(model: FileModel) -> Self {
        Self {
            id: model.file_id,
            name: model.name,
            url: model.url,
            tag: model.tag,
            key: model.key,
            chunk_total: model.chunk_total,
            is_finish: model.is_finish,
            chunks: Vec::new(),
            created_at: model.created_at.as_ref().map(format_datetime),
            updated_at: model.updated_at.as_ref().map(format_datetime),
        }
    }
}

impl FileResponse {
    pub fn with_chunks(model: FileModel, chunks: Vec<FileChunkModel>) -> Self {
        let mut response = Self::from(model);
        response.chunks = chunks.into_iter().map(FileChunkResponse::from).collect();
        response
    }
}

impl From<FileChunkModel> for FileChunkResponse {
    fn from(model: FileChunkModel) -> Self {
        Self {
            id: model.chunk_id,
            file_id: model.file_id,
            chunk_number: model.chunk_number,
            chunk_path: model.chunk_path,
        }
    }
}
