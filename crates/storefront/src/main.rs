use anyhow::{Context, Result, anyhow};
use cart::domain::requests::cart::AddToCartRequest;
use catalog::domain::requests::product::FindAllProducts;
use order::{
    domain::requests::order::{FindAllOrders, UpdateOrderStatusRequest},
    model::order::OrderStatus,
};
use shared::{auth::Session, config::Config, utils::init_logger};
use storefront::state::AppState;
use tracing::info;
use uuid::Uuid;

/// Scripted walkthrough of the whole flow: browse, fill a cart, check
/// out, then drive the order to delivered.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;
    let _guard = init_logger(&config.log_dir, "demo");

    let state = AppState::new(config.clone())
        .await
        .context("Failed to setup application")?;
    let deps = &state.di_container;

    let buyer = Session::buyer(Uuid::new_v4());
    let admin = Session::admin(Uuid::new_v4());

    info!("🛍️ Browsing the catalog as buyer {}", buyer.user_id);

    let products = deps
        .product_query
        .find_all(&buyer, &FindAllProducts::page(1, config.default_page_size))
        .await?;
    for product in &products.data {
        info!(
            "  - {} ({}): price={} stock={}",
            product.name, product.id, product.price, product.stock
        );
    }

    let picked = products
        .data
        .iter()
        .find(|p| p.stock > 0)
        .ok_or_else(|| anyhow!("demo catalog has no product in stock"))?;

    info!("🛒 Adding '{}' x2 to the cart", picked.name);

    let mut add = AddToCartRequest::one(picked.id);
    add.quantity = 2;
    deps.cart_command.add_to_cart(&buyer, &add).await?;

    let cart = deps.cart_query.get_cart(&buyer).await?;
    info!(
        "🧺 Cart holds {} item(s), subtotal={}",
        cart.data.item_count, cart.data.subtotal
    );

    let order = deps.order_command.create_order(&buyer).await?;
    info!(
        "🧾 Checked out: order {} total_amount={} status={}",
        order.data.id, order.data.total_amount, order.data.status
    );

    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ] {
        let updated = deps
            .order_command
            .update_order_status(
                &admin,
                &UpdateOrderStatusRequest {
                    order_id: order.data.id,
                    status,
                },
            )
            .await?;
        info!("🚚 Order is now {}", updated.data.status);
    }

    let history = deps
        .order_query
        .find_all(&buyer, &FindAllOrders::page(1, config.default_page_size))
        .await?;
    info!(
        "📜 Buyer order history: {}",
        serde_json::to_string_pretty(&history.data)?
    );

    Ok(())
}
