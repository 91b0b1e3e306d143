use async_trait::async_trait;
use cart::{
    abstract_trait::{
        CartCommandServiceTrait, CartQueryServiceTrait, ProductFetcherTrait, ProductSummary,
    },
    domain::requests::cart::{AddToCartRequest, RemoveFromCartRequest, UpdateCartItemRequest},
    repository::MemoryCartRepository,
    service::{CartCommandService, CartQueryService},
};
use shared::errors::{RepositoryError, ServiceError};
use shared::auth::Session;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Catalog stand-in with adjustable stock.
#[derive(Clone, Default)]
struct StubProductFetcher {
    products: Arc<RwLock<HashMap<Uuid, ProductSummary>>>,
}

impl StubProductFetcher {
    async fn insert(&self, name: &str, price: i64, stock: i32) -> Uuid {
        let product_id = Uuid::new_v4();
        self.products.write().await.insert(
            product_id,
            ProductSummary {
                product_id,
                product_name: name.to_string(),
                price,
                stock,
                image_url: None,
            },
        );
        product_id
    }

    async fn set_stock(&self, product_id: Uuid, stock: i32) {
        if let Some(product) = self.products.write().await.get_mut(&product_id) {
            product.stock = stock;
        }
    }
}

#[async_trait]
impl ProductFetcherTrait for StubProductFetcher {
    async fn find_by_id(
        &self,
        product_id: Uuid,
    ) -> Result<Option<ProductSummary>, RepositoryError> {
        Ok(self.products.read().await.get(&product_id).cloned())
    }
}

fn services(fetcher: &StubProductFetcher) -> (CartQueryService, CartCommandService) {
    let repository = Arc::new(MemoryCartRepository::new());
    (
        CartQueryService::new(repository.clone()),
        CartCommandService::new(repository, Arc::new(fetcher.clone())),
    )
}

#[tokio::test]
async fn get_cart_lazily_creates_an_empty_cart() {
    let fetcher = StubProductFetcher::default();
    let (query, _) = services(&fetcher);
    let buyer = Session::buyer(Uuid::new_v4());

    let cart = query.get_cart(&buyer).await.unwrap();
    assert_eq!(cart.data.user_id, buyer.user_id);
    assert!(cart.data.items.is_empty());
    assert_eq!(cart.data.subtotal, 0);
    assert_eq!(cart.data.item_count, 0);

    // Second read returns the same cart, not another fresh one.
    let again = query.get_cart(&buyer).await.unwrap();
    assert_eq!(again.data.id, cart.data.id);
}

#[tokio::test]
async fn concurrent_first_reads_agree_on_one_cart() {
    let fetcher = StubProductFetcher::default();
    let (query, _) = services(&fetcher);
    let buyer = Session::buyer(Uuid::new_v4());

    let (first, second) = tokio::join!(query.get_cart(&buyer), query.get_cart(&buyer));
    let first = first.unwrap();
    let second = second.unwrap();
    assert_eq!(first.data.id, second.data.id);
}

#[tokio::test]
async fn adding_same_product_twice_merges_the_line() {
    let fetcher = StubProductFetcher::default();
    let (_, command) = services(&fetcher);
    let buyer = Session::buyer(Uuid::new_v4());
    let product_id = fetcher.insert("Demo product", 3000, 10).await;

    command
        .add_to_cart(&buyer, &AddToCartRequest { product_id, quantity: 2 })
        .await
        .unwrap();
    let cart = command
        .add_to_cart(&buyer, &AddToCartRequest { product_id, quantity: 3 })
        .await
        .unwrap();

    assert_eq!(cart.data.items.len(), 1);
    assert_eq!(cart.data.items[0].quantity, 5);
    assert_eq!(cart.data.subtotal, 3000 * 5);
    assert_eq!(cart.data.item_count, 5);
}

#[tokio::test]
async fn totals_track_every_mutation() {
    let fetcher = StubProductFetcher::default();
    let (_, command) = services(&fetcher);
    let buyer = Session::buyer(Uuid::new_v4());
    let shirt = fetcher.insert("Shirt", 4980, 25).await;
    let mug = fetcher.insert("Mug", 2400, 20).await;

    command
        .add_to_cart(&buyer, &AddToCartRequest { product_id: shirt, quantity: 2 })
        .await
        .unwrap();
    let cart = command
        .add_to_cart(&buyer, &AddToCartRequest { product_id: mug, quantity: 1 })
        .await
        .unwrap();
    assert_eq!(cart.data.subtotal, 4980 * 2 + 2400);
    assert_eq!(cart.data.item_count, 3);

    let cart = command
        .update_item_quantity(&buyer, &UpdateCartItemRequest { product_id: shirt, quantity: 1 })
        .await
        .unwrap();
    assert_eq!(cart.data.subtotal, 4980 + 2400);
    assert_eq!(cart.data.item_count, 2);

    let cart = command
        .remove_from_cart(&buyer, &RemoveFromCartRequest { product_id: mug })
        .await
        .unwrap();
    assert_eq!(cart.data.subtotal, 4980);
    assert_eq!(cart.data.item_count, 1);
}

#[tokio::test]
async fn out_of_stock_product_cannot_be_added() {
    let fetcher = StubProductFetcher::default();
    let (_, command) = services(&fetcher);
    let buyer = Session::buyer(Uuid::new_v4());
    let product_id = fetcher.insert("Tote bag", 6800, 0).await;

    let err = command
        .add_to_cart(&buyer, &AddToCartRequest::one(product_id))
        .await
        .unwrap_err();

    match err {
        ServiceError::Validation { field, message } => {
            assert_eq!(field, "quantity");
            assert!(message.contains("insufficient stock"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn add_checks_stock_against_quantity_already_in_cart() {
    let fetcher = StubProductFetcher::default();
    let (_, command) = services(&fetcher);
    let buyer = Session::buyer(Uuid::new_v4());
    let product_id = fetcher.insert("Scarce", 1000, 3).await;

    command
        .add_to_cart(&buyer, &AddToCartRequest { product_id, quantity: 2 })
        .await
        .unwrap();

    // 2 in cart + 2 requested > 3 in stock
    let err = command
        .add_to_cart(&buyer, &AddToCartRequest { product_id, quantity: 2 })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation { .. }));

    // 2 + 1 == 3 is still fine
    let cart = command
        .add_to_cart(&buyer, &AddToCartRequest { product_id, quantity: 1 })
        .await
        .unwrap();
    assert_eq!(cart.data.items[0].quantity, 3);
}

#[tokio::test]
async fn merging_cannot_push_a_line_past_99() {
    let fetcher = StubProductFetcher::default();
    let (_, command) = services(&fetcher);
    let buyer = Session::buyer(Uuid::new_v4());
    let product_id = fetcher.insert("Bulk", 100, 500).await;

    let cart = command
        .add_to_cart(&buyer, &AddToCartRequest { product_id, quantity: 99 })
        .await
        .unwrap();
    assert_eq!(cart.data.items[0].quantity, 99);

    // Plenty of stock left, but the line is already at the bound.
    let err = command
        .add_to_cart(&buyer, &AddToCartRequest { product_id, quantity: 99 })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation { ref field, .. } if field == "quantity"));

    let err = command
        .add_to_cart(&buyer, &AddToCartRequest::one(product_id))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation { .. }));
}

#[tokio::test]
async fn update_rechecks_live_stock() {
    let fetcher = StubProductFetcher::default();
    let (_, command) = services(&fetcher);
    let buyer = Session::buyer(Uuid::new_v4());
    let product_id = fetcher.insert("Dwindling", 1000, 10).await;

    command
        .add_to_cart(&buyer, &AddToCartRequest { product_id, quantity: 2 })
        .await
        .unwrap();

    // Stock drops after the item went in; update must see the live value.
    fetcher.set_stock(product_id, 1).await;

    let err = command
        .update_item_quantity(&buyer, &UpdateCartItemRequest { product_id, quantity: 2 })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation { .. }));

    command
        .update_item_quantity(&buyer, &UpdateCartItemRequest { product_id, quantity: 1 })
        .await
        .unwrap();
}

#[tokio::test]
async fn update_and_remove_require_the_item_to_exist() {
    let fetcher = StubProductFetcher::default();
    let (_, command) = services(&fetcher);
    let buyer = Session::buyer(Uuid::new_v4());
    let product_id = fetcher.insert("Present", 1000, 5).await;

    let err = command
        .update_item_quantity(&buyer, &UpdateCartItemRequest { product_id, quantity: 1 })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = command
        .remove_from_cart(&buyer, &RemoveFromCartRequest { product_id })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let fetcher = StubProductFetcher::default();
    let (_, command) = services(&fetcher);
    let buyer = Session::buyer(Uuid::new_v4());

    let err = command
        .add_to_cart(&buyer, &AddToCartRequest::one(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn quantity_bounds_are_validated() {
    let fetcher = StubProductFetcher::default();
    let (_, command) = services(&fetcher);
    let buyer = Session::buyer(Uuid::new_v4());
    let product_id = fetcher.insert("Bulk", 100, 500).await;

    let err = command
        .add_to_cart(&buyer, &AddToCartRequest { product_id, quantity: 100 })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation { .. }));

    // Zero means "remove", which has its own operation.
    let err = command
        .update_item_quantity(&buyer, &UpdateCartItemRequest { product_id, quantity: 0 })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation { .. }));
}

#[tokio::test]
async fn admins_have_no_cart() {
    let fetcher = StubProductFetcher::default();
    let (query, command) = services(&fetcher);
    let admin = Session::admin(Uuid::new_v4());
    let product_id = fetcher.insert("Anything", 100, 5).await;

    assert!(matches!(
        query.get_cart(&admin).await.unwrap_err(),
        ServiceError::Forbidden(_)
    ));
    assert!(matches!(
        command
            .add_to_cart(&admin, &AddToCartRequest::one(product_id))
            .await
            .unwrap_err(),
        ServiceError::Forbidden(_)
    ));
}
