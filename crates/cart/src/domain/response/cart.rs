use crate::model::cart::{Cart, CartItem};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartItemResponse {
    #[serde(rename = "product_id")]
    pub product_id: Uuid,
    #[serde(rename = "product_name")]
    pub product_name: String,
    pub price: i64,
    #[serde(rename = "image_url")]
    pub image_url: Option<String>,
    pub quantity: i32,
    #[serde(rename = "added_at")]
    pub added_at: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(value: CartItem) -> Self {
        CartItemResponse {
            product_id: value.product_id,
            product_name: value.product_name,
            price: value.price,
            image_url: value.image_url,
            quantity: value.quantity,
            added_at: value.added_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartResponse {
    pub id: Uuid,
    #[serde(rename = "user_id")]
    pub user_id: Uuid,
    pub items: Vec<CartItemResponse>,
    pub subtotal: i64,
    #[serde(rename = "item_count")]
    pub item_count: i32,
    #[serde(rename = "created_at")]
    pub created_at: String,
    #[serde(rename = "updated_at")]
    pub updated_at: String,
}

impl From<Cart> for CartResponse {
    fn from(value: Cart) -> Self {
        let subtotal = value.subtotal();
        let item_count = value.item_count();

        CartResponse {
            id: value.cart_id,
            user_id: value.user_id,
            items: value.items.into_iter().map(CartItemResponse::from).collect(),
            subtotal,
            item_count,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}
