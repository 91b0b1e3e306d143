use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductFetcher = Arc<dyn ProductFetcherTrait + Send + Sync>;

/// The narrow view of the catalog that cart operations need: identity to
/// snapshot into lines, plus live stock for the advisory check.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductSummary {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: i64,
    pub stock: i32,
    pub image_url: Option<String>,
}

#[async_trait]
pub trait ProductFetcherTrait {
    async fn find_by_id(&self, product_id: Uuid)
    -> Result<Option<ProductSummary>, RepositoryError>;
}
