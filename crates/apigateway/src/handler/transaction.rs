use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::transaction::service::{
        command::DynTransactionCommandService, query::DynTransactionQueryService,
    },
    domain::{
        requests::transaction::{
            CreateTransactionRequest, FindAllTransactions, UpdateTransactionStatusRequest,
        },
        responses::{ApiResponse, ApiResponsePagination, TransactionResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/transaction/create",
    tag = "Transaction",
    request_body = CreateTransactionRequest,
    responses(
        (status = 200, description = "Created transaction", body = ApiResponse<TransactionResponse>),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_transaction(
    Extension(service): Extension<DynTransactionCommandService>,
    Json(body): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.create(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/transaction/list",
    tag = "Transaction",
    request_body = FindAllTransactions,
    responses(
        (status = 200, description = "List of transactions", body = ApiResponsePagination<Vec<TransactionResponse>>),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_transactions(
    Extension(service): Extension<DynTransactionQueryService>,
    Json(body): Json<FindAllTransactions>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.find_all(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/transaction/status",
    tag = "Transaction",
    request_body = UpdateTransactionStatusRequest,
    responses(
        (status = 200, description = "Updated transaction", body = ApiResponse<TransactionResponse>),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Transaction not found"),
        (status = 409, description = "Illegal status transition")
    )
)]
pub async fn update_transaction_status(
    Extension(service): Extension<DynTransactionCommandService>,
    Json(body): Json<UpdateTransactionStatusRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.update_status(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/transaction/{id}",
    tag = "Transaction",
    params(("id" = i32, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction details", body = ApiResponse<TransactionResponse>),
        (status = 404, description = "Transaction not found")
    )
)]
pub async fn get_transaction(
    Extension(service): Extension<DynTransactionQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.find_by_id(id).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

pub fn transaction_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/transaction/create", post(create_transaction))
        .route("/api/transaction/list", post(list_transactions))
        .route("/api/transaction/status", post(update_transaction_status))
        .route("/api/transaction/{id}", get(get_transaction))
        .layer(Extension(app_state.di_container.transaction_query.clone()))
        .layer(Extension(
            app_state.di_container.transaction_command.clone(),
        ))
}
