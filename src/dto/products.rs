use serde::Deserialize;

use crate::models::Category;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub category: Category,
    pub price: i64,
    #[serde(default)]
    pub original_price: Option<i64>,
    pub image: String,
    pub description: String,
    pub specs: Vec<String>,
    pub stock: u32,
    pub brand: String,
}

/// Partial update; only the fields that are present are replaced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<i64>,
    pub original_price: Option<i64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub specs: Option<Vec<String>>,
    pub stock: Option<u32>,
    pub brand: Option<String>,
}
