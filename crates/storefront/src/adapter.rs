use async_trait::async_trait;
use cart::abstract_trait::{DynCartRepository, ProductFetcherTrait, ProductSummary};
use catalog::abstract_trait::DynProductQueryRepository;
use catalog::model::product::ProductStatus;
use order::abstract_trait::CartFetcherTrait;
use shared::errors::RepositoryError;
use uuid::Uuid;

/// Serves cart lookups straight from the catalog store. Only published
/// products are visible to the cart; anything else reads as absent.
#[derive(Clone)]
pub struct CatalogProductFetcher {
    products: DynProductQueryRepository,
}

impl CatalogProductFetcher {
    pub fn new(products: DynProductQueryRepository) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductFetcherTrait for CatalogProductFetcher {
    async fn find_by_id(
        &self,
        product_id: Uuid,
    ) -> Result<Option<ProductSummary>, RepositoryError> {
        let product = self.products.find_by_id(product_id).await?;

        Ok(product
            .filter(|p| p.status == ProductStatus::Published)
            .map(|p| ProductSummary {
                product_id: p.product_id,
                product_name: p.name,
                price: p.price,
                stock: p.stock,
                image_url: p.image_url,
            }))
    }
}

/// Gives the checkout path its read-then-clear view of the cart store.
#[derive(Clone)]
pub struct CartSnapshotFetcher {
    carts: DynCartRepository,
}

impl CartSnapshotFetcher {
    pub fn new(carts: DynCartRepository) -> Self {
        Self { carts }
    }
}

#[async_trait]
impl CartFetcherTrait for CartSnapshotFetcher {
    async fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<cart::model::cart::Cart>, RepositoryError> {
        self.carts.find_by_user_id(user_id).await
    }

    async fn clear(&self, user_id: Uuid) -> Result<(), RepositoryError> {
        self.carts.clear(user_id).await
    }
}
