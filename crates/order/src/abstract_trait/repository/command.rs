use crate::{
    domain::requests::order::CreateOrderRecord,
    model::order::{Order as OrderModel, OrderStatus},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create(&self, req: &CreateOrderRecord) -> Result<OrderModel, RepositoryError>;
    /// Persists a new status and bumps `updated_at`. Transition legality
    /// is the service's business, not the store's.
    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<OrderModel, RepositoryError>;
}
