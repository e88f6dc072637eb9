use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileModel {
    pub file_id: i32,
    pub name: String,
    pub url: String,
    pub tag: String,
    pub key: String,
    pub chunk_total: i32,
    pub is_finish: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// One uploaded slice of an unfinished file. Rows are deleted wholesale when
/// the owning file is marked finished.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileChunkModel {
    pub chunk_id: i32,
    pub file_id: i32,
    pub chunk_number: i32,
    pub chunk_path: String,
    pub created_at: Option<NaiveDateTime>,
}
