use crate::model::product::ProductStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FindAllProducts {
    #[validate(range(min = 1))]
    pub page: i32,

    #[validate(range(min = 1, max = 100))]
    #[serde(rename = "page_size")]
    pub page_size: i32,

    pub status: Option<ProductStatus>,

    /// Substring match against name and description.
    pub keyword: Option<String>,
}

impl FindAllProducts {
    pub fn page(page: i32, page_size: i32) -> Self {
        Self {
            page,
            page_size,
            status: None,
            keyword: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(range(min = 0))]
    pub price: i64,

    #[validate(range(min = 0))]
    pub stock: i32,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(url)]
    #[serde(rename = "image_url")]
    pub image_url: Option<String>,

    pub status: ProductStatus,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct UpdateProductRequest {
    #[serde(rename = "product_id")]
    pub product_id: Uuid,

    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    pub price: Option<i64>,

    #[validate(range(min = 0))]
    pub stock: Option<i32>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(url)]
    #[serde(rename = "image_url")]
    pub image_url: Option<String>,

    pub status: Option<ProductStatus>,
}
