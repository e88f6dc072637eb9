use axum::{Json, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Service is healthy"
        })),
    )
}

pub fn health_routes() -> OpenApiRouter {
    OpenApiRouter::new().route("/health", get(health_check))
}
