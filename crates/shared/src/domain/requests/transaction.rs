use crate::domain::requests::pagination::PageRequest;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateTransactionRequest {
    #[validate(range(min = 1, message = "product_id is required"))]
    pub product_id: i32,

    #[validate(range(min = 1, message = "user_id is required"))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "amount must be positive"))]
    pub amount: i64,

    #[validate(length(min = 1, message = "payment_method is required"))]
    pub payment_method: String,

    #[serde(default)]
    pub description: String,
}

/// Optional equality filters compose with AND, in this order:
/// order_id, user_id, status, payment_method. Empty/zero means absent.
#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct FindAllTransactions {
    #[serde(default)]
    pub order_id: String,

    #[serde(default)]
    pub user_id: i32,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub payment_method: String,

    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageRequest,
}

/// Fully-resolved row the command service hands to the repository after
/// generating the order id and fixing the initial status.
#[derive(Debug, Clone)]
pub struct InsertTransaction {
    pub order_id: String,
    pub user_id: i32,
    pub product_id: i32,
    pub amount: i64,
    pub status: String,
    pub payment_method: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateTransactionStatusRequest {
    #[validate(length(min = 1, message = "order_id is required"))]
    pub order_id: String,

    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct RefundTransactionRequest {
    #[validate(length(min = 1, message = "order_id is required"))]
    pub order_id: String,

    #[validate(range(min = 1, message = "amount must be positive"))]
    pub amount: i64,
}
