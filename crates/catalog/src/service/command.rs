use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductResponse,
    },
};
use async_trait::async_trait;
use shared::{
    auth::{Action, Session, authorize},
    domain::responses::ApiResponse,
    errors::ServiceError,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        session: &Session,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        authorize(session, Action::ManageProducts)?;
        req.validate()?;

        let product = self.command.create(req).await?;

        info!("🆕 Product created: {} ({})", product.name, product.product_id);

        Ok(ApiResponse::success(
            "Product created successfully",
            product.into(),
        ))
    }

    async fn update_product(
        &self,
        session: &Session,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        authorize(session, Action::ManageProducts)?;
        req.validate()?;

        let product = self.command.update(req).await?;

        info!("✏️ Product updated: {}", product.product_id);

        Ok(ApiResponse::success(
            "Product updated successfully",
            product.into(),
        ))
    }

    async fn delete_product(
        &self,
        session: &Session,
        id: Uuid,
    ) -> Result<ApiResponse<()>, ServiceError> {
        authorize(session, Action::ManageProducts)?;

        self.command.delete(id).await?;

        info!("🗑️ Product deleted: {id}");

        Ok(ApiResponse::success("Product deleted successfully", ()))
    }
}
