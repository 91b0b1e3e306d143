use crate::domain::{requests::order::FindAllOrders, response::order::OrderResponse};
use async_trait::async_trait;
use shared::{
    auth::Session,
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::ServiceError,
};
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(
        &self,
        session: &Session,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        session: &Session,
        id: Uuid,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
