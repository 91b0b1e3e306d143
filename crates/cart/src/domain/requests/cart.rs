use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct AddToCartRequest {
    #[serde(rename = "product_id")]
    pub product_id: Uuid,

    #[validate(range(min = 1, max = 99))]
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

impl AddToCartRequest {
    pub fn one(product_id: Uuid) -> Self {
        Self {
            product_id,
            quantity: 1,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct UpdateCartItemRequest {
    #[serde(rename = "product_id")]
    pub product_id: Uuid,

    /// Quantity zero is rejected; removal goes through remove_from_cart.
    #[validate(range(min = 1, max = 99))]
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct RemoveFromCartRequest {
    #[serde(rename = "product_id")]
    pub product_id: Uuid,
}

/// Fully resolved line handed to the cart store, price already snapshotted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AddCartItemRecord {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub quantity: i32,
}
