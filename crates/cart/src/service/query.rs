use crate::{
    abstract_trait::{CartQueryServiceTrait, DynCartRepository},
    domain::response::cart::CartResponse,
};
use async_trait::async_trait;
use shared::{
    auth::{Action, Session, authorize},
    domain::responses::ApiResponse,
    errors::ServiceError,
};
use tracing::info;

#[derive(Clone)]
pub struct CartQueryService {
    repository: DynCartRepository,
}

impl CartQueryService {
    pub fn new(repository: DynCartRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CartQueryServiceTrait for CartQueryService {
    async fn get_cart(&self, session: &Session) -> Result<ApiResponse<CartResponse>, ServiceError> {
        authorize(session, Action::ViewCart)?;

        // Lazily created on first read; once authorized this cannot fail.
        let cart = match self.repository.find_by_user_id(session.user_id).await? {
            Some(cart) => cart,
            None => {
                info!("🛒 Creating empty cart for user {}", session.user_id);
                self.repository.create(session.user_id).await?
            }
        };

        Ok(ApiResponse::success("Cart fetched successfully", cart.into()))
    }
}
