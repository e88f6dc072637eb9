use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::{
        payment::service::DynAlipayService,
        transaction::service::{
            command::DynTransactionCommandService, query::DynTransactionQueryService,
        },
    },
    domain::{
        requests::{
            payment::{CreateAlipayPaymentRequest, PaymentStatusQuery},
            transaction::RefundTransactionRequest,
        },
        responses::{
            AlipayCreateResponse, ApiResponse, PaymentStatusResponse, TransactionResponse,
        },
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/payment/alipay/create",
    tag = "Payment",
    request_body = CreateAlipayPaymentRequest,
    responses(
        (status = 200, description = "QR code for the trade", body = ApiResponse<AlipayCreateResponse>),
        (status = 400, description = "Validation failed or amount mismatch"),
        (status = 404, description = "Order not found"),
        (status = 502, description = "Payment gateway unavailable")
    )
)]
pub async fn create_alipay_payment(
    Extension(service): Extension<DynAlipayService>,
    Json(body): Json<CreateAlipayPaymentRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.create_payment(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/payment/alipay/status",
    tag = "Payment",
    params(PaymentStatusQuery),
    responses(
        (status = 200, description = "Raw gateway trade status", body = ApiResponse<PaymentStatusResponse>),
        (status = 502, description = "Payment gateway unavailable")
    )
)]
pub async fn get_alipay_status(
    Extension(service): Extension<DynAlipayService>,
    Query(params): Query<PaymentStatusQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.query_status(&params.order_id).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/payment/status",
    tag = "Payment",
    params(PaymentStatusQuery),
    responses(
        (status = 200, description = "Transaction status from the local store", body = ApiResponse<PaymentStatusResponse>),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_payment_status(
    Extension(service): Extension<DynTransactionQueryService>,
    Query(params): Query<PaymentStatusQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.get_status(&params.order_id).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/payment/refund",
    tag = "Payment",
    request_body = RefundTransactionRequest,
    responses(
        (status = 200, description = "Refunded transaction", body = ApiResponse<TransactionResponse>),
        (status = 400, description = "Refund amount exceeds transaction amount"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Transaction is not completed")
    )
)]
pub async fn refund_payment(
    Extension(service): Extension<DynTransactionCommandService>,
    Json(body): Json<RefundTransactionRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.refund(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

pub fn payment_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/payment/alipay/create", post(create_alipay_payment))
        .route("/api/payment/alipay/status", get(get_alipay_status))
        .route("/api/payment/status", get(get_payment_status))
        .route("/api/payment/refund", post(refund_payment))
        .layer(Extension(app_state.di_container.alipay.clone()))
        .layer(Extension(app_state.di_container.transaction_query.clone()))
        .layer(Extension(
            app_state.di_container.transaction_command.clone(),
        ))
}
