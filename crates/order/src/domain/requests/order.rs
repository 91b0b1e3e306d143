use crate::model::order::{OrderItem, OrderStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FindAllOrders {
    #[validate(range(min = 1))]
    pub page: i32,

    #[validate(range(min = 1, max = 100))]
    #[serde(rename = "page_size")]
    pub page_size: i32,

    /// Honored for admins only; buyers are always scoped to themselves.
    #[serde(rename = "user_id")]
    pub user_id: Option<Uuid>,

    pub status: Option<OrderStatus>,
}

impl FindAllOrders {
    pub fn page(page: i32, page_size: i32) -> Self {
        Self {
            page,
            page_size,
            user_id: None,
            status: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct UpdateOrderStatusRequest {
    #[serde(rename = "order_id")]
    pub order_id: Uuid,

    pub status: OrderStatus,
}

/// Fully resolved order handed to the store by the checkout transaction.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateOrderRecord {
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_amount: i64,
    pub status: OrderStatus,
}
