use crate::{model::customer::CustomerModel, utils::format_datetime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub user_id: i32,
    pub authority_id: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<CustomerModel> for CustomerResponse {
    fn from(model: CustomerModel) -> Self {
        Self {
            id: model.customer_id,
            name: model.name,
            phone: model.phone,
            user_id: model.user_id,
            authority_id: model.authority_id,
            created_at: model.created_at.as_ref().map(format_datetime),
            updated_at: model.updated_at.as_ref().map(format_datetime),
        }
    }
}
