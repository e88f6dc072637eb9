use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AlipayCreateResponse {
    pub qr_code: String,
    pub order_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PaymentStatusResponse {
    pub order_id: String,
    pub status: String,
}
