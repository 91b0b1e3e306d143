use async_trait::async_trait;
use cart::model::cart::Cart;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCartFetcher = Arc<dyn CartFetcherTrait + Send + Sync>;

/// What checkout needs from the cart domain: read the snapshot, then
/// empty it once the order exists.
#[async_trait]
pub trait CartFetcherTrait {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<Cart>, RepositoryError>;
    async fn clear(&self, user_id: Uuid) -> Result<(), RepositoryError>;
}
