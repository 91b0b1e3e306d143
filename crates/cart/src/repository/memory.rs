use crate::{
    abstract_trait::CartRepositoryTrait,
    domain::requests::cart::AddCartItemRecord,
    model::cart::{Cart, CartItem},
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory cart store, keyed by user id (one cart per user).
#[derive(Clone, Default)]
pub struct MemoryCartRepository {
    carts: Arc<RwLock<HashMap<Uuid, Cart>>>,
}

impl MemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepositoryTrait for MemoryCartRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Cart>, RepositoryError> {
        Ok(self.carts.read().await.get(&user_id).cloned())
    }

    async fn create(&self, user_id: Uuid) -> Result<Cart, RepositoryError> {
        let mut store = self.carts.write().await;
        let cart = store.entry(user_id).or_insert_with(|| Cart::empty(user_id));
        Ok(cart.clone())
    }

    async fn add_item(
        &self,
        user_id: Uuid,
        item: &AddCartItemRecord,
    ) -> Result<Cart, RepositoryError> {
        let mut store = self.carts.write().await;
        let cart = store.entry(user_id).or_insert_with(|| Cart::empty(user_id));

        let now = Utc::now();
        match cart
            .items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            Some(line) => line.quantity += item.quantity,
            None => cart.items.push(CartItem {
                product_id: item.product_id,
                product_name: item.product_name.clone(),
                price: item.price,
                image_url: item.image_url.clone(),
                quantity: item.quantity,
                added_at: now,
            }),
        }
        cart.updated_at = now;

        Ok(cart.clone())
    }

    async fn update_item_quantity(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<Cart, RepositoryError> {
        let mut store = self.carts.write().await;
        let cart = store.get_mut(&user_id).ok_or(RepositoryError::NotFound)?;

        let line = cart
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id)
            .ok_or(RepositoryError::NotFound)?;

        line.quantity = quantity;
        cart.updated_at = Utc::now();

        Ok(cart.clone())
    }

    async fn remove_item(&self, user_id: Uuid, product_id: Uuid) -> Result<Cart, RepositoryError> {
        let mut store = self.carts.write().await;
        let cart = store.get_mut(&user_id).ok_or(RepositoryError::NotFound)?;

        let before = cart.items.len();
        cart.items.retain(|line| line.product_id != product_id);
        if cart.items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        cart.updated_at = Utc::now();

        Ok(cart.clone())
    }

    async fn clear(&self, user_id: Uuid) -> Result<(), RepositoryError> {
        if let Some(cart) = self.carts.write().await.get_mut(&user_id) {
            cart.items.clear();
            cart.updated_at = Utc::now();
        }
        Ok(())
    }
}
