use crate::adapter::{CartSnapshotFetcher, CatalogProductFetcher};
use anyhow::{Context, Result};
use cart::{
    abstract_trait::{
        DynCartCommandService, DynCartQueryService, DynCartRepository, DynProductFetcher,
    },
    repository::MemoryCartRepository,
    service::{CartCommandService, CartQueryService},
};
use catalog::{
    abstract_trait::{
        DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
        DynProductQueryService,
    },
    repository::MemoryProductRepository,
    seed::sample_products,
    service::{ProductCommandService, ProductQueryService},
};
use order::{
    abstract_trait::{
        DynCartFetcher, DynOrderCommandRepository, DynOrderCommandService,
        DynOrderQueryRepository, DynOrderQueryService,
    },
    repository::MemoryOrderRepository,
    service::{OrderCommandService, OrderQueryService},
};
use shared::auth::Session;
use std::{fmt, sync::Arc};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub cart_query: DynCartQueryService,
    pub cart_command: DynCartCommandService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("cart_query", &"CartQueryService")
            .field("cart_command", &"CartCommandService")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .finish()
    }
}

impl DependenciesInject {
    /// Wires every service over fresh in-memory stores. Each call builds
    /// an isolated world; nothing is shared between containers.
    pub fn new() -> Self {
        let product_repo = Arc::new(MemoryProductRepository::new());
        let product_query_repo: DynProductQueryRepository = product_repo.clone();
        let product_command_repo: DynProductCommandRepository = product_repo;

        let cart_repo: DynCartRepository = Arc::new(MemoryCartRepository::new());

        let order_repo = Arc::new(MemoryOrderRepository::new());
        let order_query_repo: DynOrderQueryRepository = order_repo.clone();
        let order_command_repo: DynOrderCommandRepository = order_repo;

        let product_fetcher: DynProductFetcher =
            Arc::new(CatalogProductFetcher::new(product_query_repo.clone()));
        let cart_fetcher: DynCartFetcher = Arc::new(CartSnapshotFetcher::new(cart_repo.clone()));

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo));
        let product_command: DynProductCommandService =
            Arc::new(ProductCommandService::new(product_command_repo));

        let cart_query: DynCartQueryService = Arc::new(CartQueryService::new(cart_repo.clone()));
        let cart_command: DynCartCommandService =
            Arc::new(CartCommandService::new(cart_repo, product_fetcher));

        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_query_repo.clone()));
        let order_command: DynOrderCommandService = Arc::new(OrderCommandService::new(
            cart_fetcher,
            order_command_repo,
            order_query_repo,
        ));

        Self {
            product_query,
            product_command,
            cart_query,
            cart_command,
            order_query,
            order_command,
        }
    }

    /// Loads the demo catalog through the regular command service, so the
    /// fixtures pass the same validation as any other write.
    pub async fn seed_demo_catalog(&self) -> Result<()> {
        let admin = Session::admin(Uuid::new_v4());

        for req in sample_products() {
            self.product_command
                .create_product(&admin, &req)
                .await
                .with_context(|| format!("failed to seed product '{}'", req.name))?;
        }

        info!("🌱 Demo catalog seeded");

        Ok(())
    }
}

impl Default for DependenciesInject {
    fn default() -> Self {
        Self::new()
    }
}
