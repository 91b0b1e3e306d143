use crate::auth::session::{Role, Session};
use crate::errors::ServiceError;

/// Everything a caller can ask the services to do. Ownership checks
/// (e.g. a buyer reading only their own orders) stay in the services;
/// this table only answers "may this role attempt the action at all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewCart,
    EditCart,
    PlaceOrder,
    ViewOrders,
    ViewAnyOrder,
    AdvanceOrder,
    ManageProducts,
}

impl Role {
    pub fn allows(&self, action: Action) -> bool {
        match self {
            Role::Buyer => matches!(
                action,
                Action::ViewCart | Action::EditCart | Action::PlaceOrder | Action::ViewOrders
            ),
            // Admins drive order lifecycles and the catalog but never touch
            // a buyer's cart.
            Role::Admin => matches!(
                action,
                Action::ViewOrders
                    | Action::ViewAnyOrder
                    | Action::AdvanceOrder
                    | Action::ManageProducts
            ),
        }
    }
}

pub fn authorize(session: &Session, action: Action) -> Result<(), ServiceError> {
    if session.role.allows(action) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden(format!(
            "role {:?} may not perform {:?}",
            session.role, action
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn buyer_cannot_advance_orders_or_manage_products() {
        let session = Session::buyer(Uuid::new_v4());
        assert!(authorize(&session, Action::AdvanceOrder).is_err());
        assert!(authorize(&session, Action::ManageProducts).is_err());
        assert!(authorize(&session, Action::ViewAnyOrder).is_err());
        assert!(authorize(&session, Action::EditCart).is_ok());
        assert!(authorize(&session, Action::PlaceOrder).is_ok());
    }

    #[test]
    fn admin_never_touches_carts() {
        let session = Session::admin(Uuid::new_v4());
        assert!(authorize(&session, Action::ViewCart).is_err());
        assert!(authorize(&session, Action::EditCart).is_err());
        assert!(authorize(&session, Action::PlaceOrder).is_err());
        assert!(authorize(&session, Action::AdvanceOrder).is_ok());
        assert!(authorize(&session, Action::ViewAnyOrder).is_ok());
    }
}
