use cart::domain::requests::cart::AddToCartRequest;
use catalog::domain::requests::product::FindAllProducts;
use order::{
    domain::requests::order::{FindAllOrders, UpdateOrderStatusRequest},
    model::order::OrderStatus,
};
use shared::{auth::Session, config::Config, errors::ServiceError};
use storefront::state::AppState;
use uuid::Uuid;

async fn seeded_state() -> AppState {
    AppState::new(Config::default())
        .await
        .expect("state should build and seed")
}

#[tokio::test]
async fn browse_add_checkout_and_deliver() {
    let state = seeded_state().await;
    let deps = &state.di_container;
    let buyer = Session::buyer(Uuid::new_v4());
    let admin = Session::admin(Uuid::new_v4());

    let products = deps
        .product_query
        .find_all(&buyer, &FindAllProducts::page(1, 20))
        .await
        .unwrap();
    let demo = products
        .data
        .iter()
        .find(|p| p.name == "Demo product")
        .expect("seed includes the demo product");
    assert_eq!(demo.price, 3000);

    let mut add = AddToCartRequest::one(demo.id);
    add.quantity = 2;
    let cart = deps.cart_command.add_to_cart(&buyer, &add).await.unwrap();
    assert_eq!(cart.data.subtotal, 6000);
    assert_eq!(cart.data.item_count, 2);

    let order = deps.order_command.create_order(&buyer).await.unwrap();
    assert_eq!(order.data.total_amount, 6000);
    assert_eq!(order.data.status, OrderStatus::Pending);

    let cart = deps.cart_query.get_cart(&buyer).await.unwrap();
    assert!(cart.data.items.is_empty());

    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ] {
        deps.order_command
            .update_order_status(
                &admin,
                &UpdateOrderStatusRequest {
                    order_id: order.data.id,
                    status,
                },
            )
            .await
            .unwrap();
    }

    let history = deps
        .order_query
        .find_all(&buyer, &FindAllOrders::page(1, 20))
        .await
        .unwrap();
    assert_eq!(history.pagination.total_items, 1);
    assert_eq!(history.data[0].status, OrderStatus::Delivered);
}

#[tokio::test]
async fn out_of_stock_seed_product_cannot_be_added() {
    let state = seeded_state().await;
    let deps = &state.di_container;
    let buyer = Session::buyer(Uuid::new_v4());

    let products = deps
        .product_query
        .find_all(&buyer, &FindAllProducts::page(1, 20))
        .await
        .unwrap();
    let tote = products
        .data
        .iter()
        .find(|p| p.stock == 0)
        .expect("seed includes an out-of-stock product");

    let err = deps
        .cart_command
        .add_to_cart(&buyer, &AddToCartRequest::one(tote.id))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation { ref field, .. } if field == "quantity"));
}

#[tokio::test]
async fn unpublished_products_are_invisible_to_the_cart() {
    let state = seeded_state().await;
    let deps = &state.di_container;
    let buyer = Session::buyer(Uuid::new_v4());
    let admin = Session::admin(Uuid::new_v4());

    let mut req = catalog::domain::requests::product::CreateProductRequest {
        name: "Back-office only".to_string(),
        price: 500,
        stock: 5,
        description: None,
        image_url: None,
        status: catalog::model::product::ProductStatus::Draft,
    };
    let draft = deps
        .product_command
        .create_product(&admin, &req)
        .await
        .unwrap();

    let err = deps
        .cart_command
        .add_to_cart(&buyer, &AddToCartRequest::one(draft.data.id))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    // Publishing makes it purchasable.
    req.status = catalog::model::product::ProductStatus::Published;
    let published = deps
        .product_command
        .create_product(&admin, &req)
        .await
        .unwrap();
    deps.cart_command
        .add_to_cart(&buyer, &AddToCartRequest::one(published.data.id))
        .await
        .unwrap();
}

#[tokio::test]
async fn containers_are_isolated_worlds() {
    let a = seeded_state().await;
    let b = seeded_state().await;
    let buyer = Session::buyer(Uuid::new_v4());

    let products = a
        .di_container
        .product_query
        .find_all(&buyer, &FindAllProducts::page(1, 20))
        .await
        .unwrap();
    let demo = products
        .data
        .iter()
        .find(|p| p.stock > 0)
        .expect("seeded product in stock");

    a.di_container
        .cart_command
        .add_to_cart(&buyer, &AddToCartRequest::one(demo.id))
        .await
        .unwrap();

    let other_cart = b.di_container.cart_query.get_cart(&buyer).await.unwrap();
    assert!(other_cart.data.items.is_empty());
}
