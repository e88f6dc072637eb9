mod customer;
mod file;
mod health;
mod payment;
mod product;
mod transaction;

use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::customer::customer_routes;
pub use self::file::file_routes;
pub use self::health::health_routes;
pub use self::payment::payment_routes;
pub use self::product::product_routes;
pub use self::transaction::transaction_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,

        transaction::create_transaction,
        transaction::list_transactions,
        transaction::update_transaction_status,
        transaction::get_transaction,

        payment::create_alipay_payment,
        payment::get_alipay_status,
        payment::get_payment_status,
        payment::refund_payment,

        product::create_product,
        product::update_product,
        product::list_products,
        product::get_product,

        customer::create_customer,
        customer::update_customer,
        customer::delete_customer,
        customer::list_customers,
        customer::get_customer,

        file::find_or_create_file,
        file::create_file_chunk,
        file::finish_file,
        file::list_files,
    ),
    tags(
        (name = "Transaction", description = "Order transactions and their status lifecycle"),
        (name = "Payment", description = "Alipay trades and refunds"),
        (name = "Product", description = "Product catalog"),
        (name = "Customer", description = "Customer records"),
        (name = "File", description = "Chunked upload bookkeeping"),
        (name = "Health", description = "Liveness"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(health_routes())
            .merge(transaction_routes(shared_state.clone()))
            .merge(payment_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(customer_routes(shared_state.clone()))
            .merge(file_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(250 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 API Documentation available at:");
        println!("   📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
