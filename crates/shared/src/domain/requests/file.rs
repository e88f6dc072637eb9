use crate::domain::requests::pagination::PageRequest;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct FindOrCreateFileRequest {
    #[validate(length(min = 1, message = "key is required"))]
    pub key: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 1, message = "chunk_total must be positive"))]
    pub chunk_total: i32,
}

/// Row the file service hands to the repository once the tag and finish
/// state have been resolved.
#[derive(Debug, Clone)]
pub struct InsertFile {
    pub name: String,
    pub url: String,
    pub tag: String,
    pub key: String,
    pub chunk_total: i32,
    pub is_finish: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateFileChunkRequest {
    #[validate(range(min = 1, message = "file_id is required"))]
    pub file_id: i32,

    #[validate(range(min = 1, max = 100000, message = "chunk_number out of range"))]
    pub chunk_number: i32,

    #[validate(length(min = 1, message = "chunk_path is required"))]
    pub chunk_path: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct FinishFileRequest {
    #[validate(length(min = 1, message = "key is required"))]
    pub key: String,

    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
}

/// Filters: name, tag (equality, empty means absent).
#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct FindAllFiles {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub tag: String,

    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageRequest,
}
