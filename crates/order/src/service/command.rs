use crate::{
    abstract_trait::{
        DynCartFetcher, DynOrderCommandRepository, DynOrderQueryRepository,
        OrderCommandServiceTrait,
    },
    domain::{
        requests::order::{CreateOrderRecord, UpdateOrderStatusRequest},
        response::order::OrderResponse,
    },
    model::order::{OrderItem, OrderStatus},
};
use async_trait::async_trait;
use shared::{
    auth::{Action, Session, authorize},
    domain::responses::ApiResponse,
    errors::ServiceError,
};
use tracing::info;

#[derive(Clone)]
pub struct OrderCommandService {
    cart_fetcher: DynCartFetcher,
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
}

impl OrderCommandService {
    pub fn new(
        cart_fetcher: DynCartFetcher,
        command: DynOrderCommandRepository,
        query: DynOrderQueryRepository,
    ) -> Self {
        Self {
            cart_fetcher,
            command,
            query,
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    /// The checkout transaction: snapshot the cart into an order, then
    /// clear the cart. Stock is NOT re-checked here; the advisory check
    /// happened at cart-add time.
    async fn create_order(
        &self,
        session: &Session,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        authorize(session, Action::PlaceOrder)?;

        info!("🧾 Creating order for user {}", session.user_id);

        let cart = self
            .cart_fetcher
            .get_by_user_id(session.user_id)
            .await?
            .filter(|cart| !cart.items.is_empty())
            .ok_or(ServiceError::EmptyCart)?;

        let items: Vec<OrderItem> = cart
            .items
            .iter()
            .map(|item| OrderItem {
                product_id: item.product_id,
                product_name: item.product_name.clone(),
                price: item.price,
                quantity: item.quantity,
            })
            .collect();

        let record = CreateOrderRecord {
            user_id: session.user_id,
            total_amount: cart.subtotal(),
            items,
            status: OrderStatus::Pending,
        };

        let order = self.command.create(&record).await?;

        // Not atomic with the create above: if the clear fails the order
        // stands and the cart keeps its items. The error is surfaced to
        // the caller rather than rolled back.
        self.cart_fetcher.clear(session.user_id).await?;

        info!(
            "✅ Order {} created, total_amount={}",
            order.order_id, order.total_amount
        );

        Ok(ApiResponse::success(
            "Order created successfully",
            order.into(),
        ))
    }

    async fn update_order_status(
        &self,
        session: &Session,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        authorize(session, Action::AdvanceOrder)?;

        let order = self
            .query
            .find_by_id(req.order_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("order {}", req.order_id)))?;

        if !order.status.can_transition_to(req.status) {
            return Err(ServiceError::InvalidTransition {
                from: order.status.to_string(),
                to: req.status.to_string(),
            });
        }

        let updated = self.command.update_status(req.order_id, req.status).await?;

        info!(
            "🚚 Order {} moved {} -> {}",
            req.order_id, order.status, updated.status
        );

        Ok(ApiResponse::success(
            "Order status updated successfully",
            updated.into(),
        ))
    }
}
