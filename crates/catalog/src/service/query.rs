use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{requests::product::FindAllProducts, response::product::ProductResponse},
    model::product::ProductStatus,
};
use async_trait::async_trait;
use shared::{
    auth::{Action, Session},
    domain::responses::{ApiResponse, ApiResponsePagination, Pagination},
    errors::ServiceError,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        session: &Session,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        req.validate()?;

        info!(
            "📦 Fetching products page={} page_size={}",
            req.page, req.page_size
        );

        // Buyers only ever see the published slice of the catalog,
        // whatever status filter they pass.
        let mut scoped = req.clone();
        if !session.role.allows(Action::ManageProducts) {
            scoped.status = Some(ProductStatus::Published);
        }

        let (products, total) = self.query.find_all(&scoped).await?;

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products fetched successfully".to_string(),
            data,
            pagination: Pagination::new(req.page, req.page_size, total),
        })
    }

    async fn find_by_id(
        &self,
        session: &Session,
        id: Uuid,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("product {id}")))?;

        // An unpublished product is invisible to buyers, not "forbidden".
        if !session.role.allows(Action::ManageProducts) && product.status != ProductStatus::Published
        {
            return Err(ServiceError::NotFound(format!("product {id}")));
        }

        Ok(ApiResponse::success(
            "Product fetched successfully",
            product.into(),
        ))
    }
}
