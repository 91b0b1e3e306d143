use crate::model::product::{Product as ProductModel, ProductStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub description: Option<String>,
    #[serde(rename = "image_url")]
    pub image_url: Option<String>,
    pub status: ProductStatus,
    #[serde(rename = "created_at")]
    pub created_at: String,
    #[serde(rename = "updated_at")]
    pub updated_at: String,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            price: value.price,
            stock: value.stock,
            description: value.description,
            image_url: value.image_url,
            status: value.status,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}
