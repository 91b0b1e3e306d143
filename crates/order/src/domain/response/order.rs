use crate::model::order::{Order as OrderModel, OrderItem, OrderStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItemResponse {
    #[serde(rename = "product_id")]
    pub product_id: Uuid,
    #[serde(rename = "product_name")]
    pub product_name: String,
    pub price: i64,
    pub quantity: i32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            product_id: value.product_id,
            product_name: value.product_name,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderResponse {
    pub id: Uuid,
    #[serde(rename = "user_id")]
    pub user_id: Uuid,
    pub items: Vec<OrderItemResponse>,
    #[serde(rename = "total_amount")]
    pub total_amount: i64,
    pub status: OrderStatus,
    #[serde(rename = "created_at")]
    pub created_at: String,
    #[serde(rename = "updated_at")]
    pub updated_at: String,
}

impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            id: value.order_id,
            user_id: value.user_id,
            items: value
                .items
                .into_iter()
                .map(OrderItemResponse::from)
                .collect(),
            total_amount: value.total_amount,
            status: value.status,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}
