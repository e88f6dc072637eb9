use crate::domain::responses::pagination::Pagination;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The uniform envelope every endpoint returns.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponsePagination<T> {
    pub status: String,
    pub message: String,
    pub data: T,
    pub pagination: Pagination,
}
