use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::customer::service::{
        command::DynCustomerCommandService, query::DynCustomerQueryService,
    },
    domain::{
        requests::customer::{
            CreateCustomerRequest, DeleteCustomerRequest, FindAllCustomers, UpdateCustomerRequest,
        },
        responses::{ApiResponse, ApiResponsePagination, CustomerResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/customer/create",
    tag = "Customer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Created customer", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    Json(body): Json<CreateCustomerRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.create(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/customer/update",
    tag = "Customer",
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Updated customer", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    Json(body): Json<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.update(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/customer/delete",
    tag = "Customer",
    request_body = DeleteCustomerRequest,
    responses(
        (status = 200, description = "Customer deleted", body = ApiResponse<bool>),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    Json(body): Json<DeleteCustomerRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.delete(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/customer/list",
    tag = "Customer",
    request_body = FindAllCustomers,
    responses(
        (status = 200, description = "List of customers", body = ApiResponsePagination<Vec<CustomerResponse>>),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn list_customers(
    Extension(service): Extension<DynCustomerQueryService>,
    Json(body): Json<FindAllCustomers>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.find_all(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/customer/{id}",
    tag = "Customer",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    Extension(service): Extension<DynCustomerQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.find_by_id(id).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/customer/create", post(create_customer))
        .route("/api/customer/update", post(update_customer))
        .route("/api/customer/delete", post(delete_customer))
        .route("/api/customer/list", post(list_customers))
        .route("/api/customer/{id}", get(get_customer))
        .layer(Extension(app_state.di_container.customer_query.clone()))
        .layer(Extension(app_state.di_container.customer_command.clone()))
}
