use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateAlipayPaymentRequest {
    #[validate(length(min = 1, message = "order_id is required"))]
    pub order_id: String,

    #[validate(range(min = 1, message = "amount must be positive"))]
    pub amount: i64,

    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams, Clone)]
pub struct PaymentStatusQuery {
    #[validate(length(min = 1, message = "order_id is required"))]
    pub order_id: String,
}
