use crate::domain::requests::pagination::PageRequest;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    #[validate(range(min = 1, message = "user_id is required"))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "authority_id is required"))]
    pub authority_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateCustomerRequest {
    #[validate(range(min = 1, message = "customer_id is required"))]
    pub customer_id: i32,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    #[validate(range(min = 1, message = "user_id is required"))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "authority_id is required"))]
    pub authority_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct DeleteCustomerRequest {
    #[validate(range(min = 1, message = "customer_id is required"))]
    pub customer_id: i32,
}

/// Filters: user_id, authority_id (equality, zero means absent).
#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct FindAllCustomers {
    #[serde(default)]
    pub user_id: i32,

    #[serde(default)]
    pub authority_id: i32,

    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageRequest,
}
