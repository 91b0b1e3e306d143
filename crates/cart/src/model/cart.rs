use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line in a cart. Name, price and image are snapshotted from the
/// product at add time so later catalog edits don't rewrite carts.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

/// Per-user pre-checkout collection. Totals are derived, never stored.
/// Invariant: at most one item per product_id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cart {
    pub cart_id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn empty(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            cart_id: Uuid::new_v4(),
            user_id,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn subtotal(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.price * item.quantity as i64)
            .sum()
    }

    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn quantity_of(&self, product_id: Uuid) -> i32 {
        self.items
            .iter()
            .find(|item| item.product_id == product_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: i64, quantity: i32) -> CartItem {
        CartItem {
            product_id: Uuid::new_v4(),
            product_name: "item".to_string(),
            price,
            image_url: None,
            quantity,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn totals_are_derived_from_lines() {
        let mut cart = Cart::empty(Uuid::new_v4());
        assert_eq!(cart.subtotal(), 0);
        assert_eq!(cart.item_count(), 0);

        cart.items.push(item(3000, 2));
        cart.items.push(item(500, 3));

        assert_eq!(cart.subtotal(), 3000 * 2 + 500 * 3);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn quantity_of_missing_product_is_zero() {
        let cart = Cart::empty(Uuid::new_v4());
        assert_eq!(cart.quantity_of(Uuid::new_v4()), 0);
    }
}
