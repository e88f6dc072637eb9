use crate::{model::transaction::TransactionModel, utils::format_datetime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TransactionResponse {
    pub id: i32,
    pub order_id: String,
    pub user_id: i32,
    pub product_id: i32,
    pub amount: i64,
    pub status: String,
    pub payment_method: String,
    pub description: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<TransactionModel> for TransactionResponse {
    fn from(model: TransactionModel) -> Self {
        Self {
            id: model.transaction_id,
            order_id: model.order_id,
            user_id: model.user_id,
            product_id: model.product_id,
            amount: model.amount,
            status: model.status,
            payment_method: model.payment_method,
            description: model.description,
            created_at: model.created_at.as_ref().map(format_datetime),
            updated_at: model.updated_at.as_ref().map(format_datetime),
        }
    }
}
