use crate::{
    abstract_trait::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    domain::requests::order::{CreateOrderRecord, FindAllOrders},
    model::order::{Order, OrderStatus},
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory order store. Listing is newest-first.
#[derive(Clone, Default)]
pub struct MemoryOrderRepository {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MemoryOrderRepository {
    async fn find_all(&self, req: &FindAllOrders) -> Result<(Vec<Order>, i64), RepositoryError> {
        let store = self.orders.read().await;

        let mut matches: Vec<Order> = store
            .values()
            .filter(|o| req.user_id.is_none_or(|user_id| o.user_id == user_id))
            .filter(|o| req.status.is_none_or(|status| o.status == status))
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matches.len() as i64;
        // i64 math: page is only bounded below, so i32 multiply can overflow.
        let offset = (req.page as i64 - 1).saturating_mul(req.page_size as i64).max(0) as usize;
        let page = matches
            .into_iter()
            .skip(offset)
            .take(req.page_size as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepositoryError> {
        Ok(self.orders.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MemoryOrderRepository {
    async fn create(&self, req: &CreateOrderRecord) -> Result<Order, RepositoryError> {
        if req.items.is_empty() {
            return Err(RepositoryError::Conflict(
                "order must contain at least one item".to_string(),
            ));
        }

        let now = Utc::now();
        let order = Order {
            order_id: Uuid::new_v4(),
            user_id: req.user_id,
            items: req.items.clone(),
            total_amount: req.total_amount,
            status: req.status,
            created_at: now,
            updated_at: now,
        };

        self.orders
            .write()
            .await
            .insert(order.order_id, order.clone());

        Ok(order)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut store = self.orders.write().await;
        let order = store.get_mut(&id).ok_or(RepositoryError::NotFound)?;

        order.status = status;
        order.updated_at = Utc::now();

        Ok(order.clone())
    }
}
