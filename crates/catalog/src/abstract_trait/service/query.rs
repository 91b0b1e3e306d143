use crate::domain::{requests::product::FindAllProducts, response::product::ProductResponse};
use async_trait::async_trait;
use shared::{
    auth::Session,
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::ServiceError,
};
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        session: &Session,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        session: &Session,
        id: Uuid,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
}
