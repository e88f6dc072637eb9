use crate::state::AppState;
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};
use shared::{
    abstract_trait::file::service::{command::DynFileCommandService, query::DynFileQueryService},
    domain::{
        requests::file::{
            CreateFileChunkRequest, FindAllFiles, FindOrCreateFileRequest, FinishFileRequest,
        },
        responses::{ApiResponse, ApiResponsePagination, FileChunkResponse, FileResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/file/find",
    tag = "File",
    request_body = FindOrCreateFileRequest,
    responses(
        (status = 200, description = "File record, new or resumed, with any uploaded chunks", body = ApiResponse<FileResponse>),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn find_or_create_file(
    Extension(service): Extension<DynFileCommandService>,
    Json(body): Json<FindOrCreateFileRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.find_or_create(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/file/chunk",
    tag = "File",
    request_body = CreateFileChunkRequest,
    responses(
        (status = 200, description = "Recorded chunk", body = ApiResponse<FileChunkResponse>),
        (status = 400, description = "Validation failed or unknown file")
    )
)]
pub async fn create_file_chunk(
    Extension(service): Extension<DynFileCommandService>,
    Json(body): Json<CreateFileChunkRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.create_chunk(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/file/finish",
    tag = "File",
    request_body = FinishFileRequest,
    responses(
        (status = 200, description = "Finished file record", body = ApiResponse<FileResponse>),
        (status = 404, description = "File not found")
    )
)]
pub async fn finish_file(
    Extension(service): Extension<DynFileCommandService>,
    Json(body): Json<FinishFileRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.finish(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/file/list",
    tag = "File",
    request_body = FindAllFiles,
    responses(
        (status = 200, description = "List of file records", body = ApiResponsePagination<Vec<FileResponse>>),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn list_files(
    Extension(service): Extension<DynFileQueryService>,
    Json(body): Json<FindAllFiles>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.find_all(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

pub fn file_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/file/find", post(find_or_create_file))
        .route("/api/file/chunk", post(create_file_chunk))
        .route("/api/file/finish", post(finish_file))
        .route("/api/file/list", post(list_files))
        .layer(Extension(app_state.di_container.file_query.clone()))
        .layer(Extension(app_state.di_container.file_command.clone()))
}
