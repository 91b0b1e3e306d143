use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Published,
    Archived,
}

/// Catalog entry. Price is in the minor currency unit. Stock is advisory:
/// cart and order logic read it but never decrement it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    pub product_id: Uuid,
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
