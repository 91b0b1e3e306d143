use crate::{
    abstract_trait::{CartCommandServiceTrait, DynCartRepository, DynProductFetcher},
    domain::{
        requests::cart::{
            AddCartItemRecord, AddToCartRequest, RemoveFromCartRequest, UpdateCartItemRequest,
        },
        response::cart::CartResponse,
    },
};
use async_trait::async_trait;
use shared::{
    auth::{Action, Session, authorize},
    domain::responses::ApiResponse,
    errors::ServiceError,
};
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct CartCommandService {
    repository: DynCartRepository,
    product_fetcher: DynProductFetcher,
}

impl CartCommandService {
    pub fn new(repository: DynCartRepository, product_fetcher: DynProductFetcher) -> Self {
        Self {
            repository,
            product_fetcher,
        }
    }
}

#[async_trait]
impl CartCommandServiceTrait for CartCommandService {
    async fn add_to_cart(
        &self,
        session: &Session,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        authorize(session, Action::EditCart)?;
        req.validate()?;

        info!(
            "🛒 Adding product {} x{} for user {}",
            req.product_id, req.quantity, session.user_id
        );

        let product = self
            .product_fetcher
            .find_by_id(req.product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("product {}", req.product_id)))?;

        // Advisory stock check against the cart total for this product.
        // Nothing is reserved; checkout may still race another buyer.
        let already_in_cart = self
            .repository
            .find_by_user_id(session.user_id)
            .await?
            .map(|cart| cart.quantity_of(req.product_id))
            .unwrap_or(0);

        let requested = already_in_cart + req.quantity;
        if product.stock == 0 || requested > product.stock {
            return Err(ServiceError::validation(
                "quantity",
                format!(
                    "insufficient stock for product {}: requested {}, available {}",
                    req.product_id, requested, product.stock
                ),
            ));
        }

        // The per-line bound also holds after a merge, not just per request.
        if requested > 99 {
            return Err(ServiceError::validation(
                "quantity",
                format!(
                    "cart line for product {} would hold {}, the limit per product is 99",
                    req.product_id, requested
                ),
            ));
        }

        let record = AddCartItemRecord {
            product_id: product.product_id,
            product_name: product.product_name,
            price: product.price,
            image_url: product.image_url,
            quantity: req.quantity,
        };

        let cart = self.repository.add_item(session.user_id, &record).await?;

        Ok(ApiResponse::success("Item added to cart", cart.into()))
    }

    async fn update_item_quantity(
        &self,
        session: &Session,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        authorize(session, Action::EditCart)?;
        req.validate()?;

        let in_cart = self
            .repository
            .find_by_user_id(session.user_id)
            .await?
            .is_some_and(|cart| cart.quantity_of(req.product_id) > 0);
        if !in_cart {
            return Err(ServiceError::NotFound(format!(
                "cart item {}",
                req.product_id
            )));
        }

        // Re-checked against the live product, not the cart's snapshot.
        let product = self
            .product_fetcher
            .find_by_id(req.product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("product {}", req.product_id)))?;

        if req.quantity > product.stock {
            return Err(ServiceError::validation(
                "quantity",
                format!(
                    "insufficient stock for product {}: requested {}, available {}",
                    req.product_id, req.quantity, product.stock
                ),
            ));
        }

        let cart = self
            .repository
            .update_item_quantity(session.user_id, req.product_id, req.quantity)
            .await?;

        info!(
            "🛒 Updated quantity of {} to {} for user {}",
            req.product_id, req.quantity, session.user_id
        );

        Ok(ApiResponse::success("Cart item updated", cart.into()))
    }

    async fn remove_from_cart(
        &self,
        session: &Session,
        req: &RemoveFromCartRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        authorize(session, Action::EditCart)?;
        req.validate()?;

        let in_cart = self
            .repository
            .find_by_user_id(session.user_id)
            .await?
            .is_some_and(|cart| cart.quantity_of(req.product_id) > 0);
        if !in_cart {
            return Err(ServiceError::NotFound(format!(
                "cart item {}",
                req.product_id
            )));
        }

        let cart = self
            .repository
            .remove_item(session.user_id, req.product_id)
            .await?;

        info!(
            "🛒 Removed product {} from cart of user {}",
            req.product_id, session.user_id
        );

        Ok(ApiResponse::success("Item removed from cart", cart.into()))
    }
}
