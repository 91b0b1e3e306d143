use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{requests::order::FindAllOrders, response::order::OrderResponse},
};
use async_trait::async_trait;
use shared::{
    auth::{Action, Session, authorize},
    domain::responses::{ApiResponse, ApiResponsePagination, Pagination},
    errors::ServiceError,
};
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        session: &Session,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        authorize(session, Action::ViewOrders)?;
        req.validate()?;

        // Buyers only ever see their own orders, whatever user filter
        // they pass; admins may scope or see everything.
        let mut scoped = req.clone();
        if !session.role.allows(Action::ViewAnyOrder) {
            scoped.user_id = Some(session.user_id);
        }

        let (orders, total) = self.query.find_all(&scoped).await?;

        let data: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Orders fetched successfully".to_string(),
            data,
            pagination: Pagination::new(req.page, req.page_size, total),
        })
    }

    async fn find_by_id(
        &self,
        session: &Session,
        id: Uuid,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        authorize(session, Action::ViewOrders)?;

        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("order {id}")))?;

        // An order owned by someone else must be indistinguishable from
        // one that does not exist.
        if !session.role.allows(Action::ViewAnyOrder) && order.user_id != session.user_id {
            return Err(ServiceError::NotFound(format!("order {id}")));
        }

        Ok(ApiResponse::success(
            "Order fetched successfully",
            order.into(),
        ))
    }
}
