use crate::{domain::requests::cart::AddCartItemRecord, model::cart::Cart};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartRepositoryTrait {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Cart>, RepositoryError>;
    /// Idempotent: returns the existing cart when one is already there, so
    /// racing first reads for the same user all succeed.
    async fn create(&self, user_id: Uuid) -> Result<Cart, RepositoryError>;
    /// Merges by product_id: an existing line has its quantity incremented
    /// in place rather than a duplicate row appended.
    async fn add_item(
        &self,
        user_id: Uuid,
        item: &AddCartItemRecord,
    ) -> Result<Cart, RepositoryError>;
    async fn update_item_quantity(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<Cart, RepositoryError>;
    async fn remove_item(&self, user_id: Uuid, product_id: Uuid) -> Result<Cart, RepositoryError>;
    /// Empties the cart; the cart row itself survives.
    async fn clear(&self, user_id: Uuid) -> Result<(), RepositoryError>;
}
