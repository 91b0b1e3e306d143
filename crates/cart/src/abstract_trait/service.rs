use crate::domain::{
    requests::cart::{AddToCartRequest, RemoveFromCartRequest, UpdateCartItemRequest},
    response::cart::CartResponse,
};
use async_trait::async_trait;
use shared::{auth::Session, domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynCartQueryService = Arc<dyn CartQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryServiceTrait {
    async fn get_cart(&self, session: &Session) -> Result<ApiResponse<CartResponse>, ServiceError>;
}

pub type DynCartCommandService = Arc<dyn CartCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartCommandServiceTrait {
    async fn add_to_cart(
        &self,
        session: &Session,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn update_item_quantity(
        &self,
        session: &Session,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn remove_from_cart(
        &self,
        session: &Session,
        req: &RemoveFromCartRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
}
