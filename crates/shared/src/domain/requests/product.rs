use crate::domain::requests::pagination::PageRequest;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub price: i64,

    #[validate(range(min = 0, message = "stock cannot be negative"))]
    pub stock: i32,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateProductRequest {
    #[validate(range(min = 1, message = "product_id is required"))]
    pub product_id: i32,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub price: i64,

    #[validate(range(min = 0, message = "stock cannot be negative"))]
    pub stock: i32,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub image_url: String,
}

/// Filters: name, category (both equality, empty means absent).
#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct FindAllProducts {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageRequest,
}
