use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::product::service::{
        command::DynProductCommandService, query::DynProductQueryService,
    },
    domain::{
        requests::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        responses::{ApiResponse, ApiResponsePagination, ProductResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/product/create",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Created product", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    Json(body): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.create(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/product/update",
    tag = "Product",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.update(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/product/list",
    tag = "Product",
    request_body = FindAllProducts,
    responses(
        (status = 200, description = "List of products", body = ApiResponsePagination<Vec<ProductResponse>>),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn list_products(
    Extension(service): Extension<DynProductQueryService>,
    Json(body): Json<FindAllProducts>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.find_all(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/product/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.find_by_id(id).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/product/create", post(create_product))
        .route("/api/product/update", post(update_product))
        .route("/api/product/list", post(list_products))
        .route("/api/product/{id}", get(get_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
