use crate::{
    abstract_trait::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
    domain::requests::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    model::product::Product,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory product store. Clones share the same map, so one instance is
/// constructed at startup and handed to everything that needs it.
#[derive(Clone, Default)]
pub struct MemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryProductRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let store = self.products.read().await;

        let keyword = req.keyword.as_deref().map(str::to_lowercase);

        let mut matches: Vec<Product> = store
            .values()
            .filter(|p| req.status.is_none_or(|s| p.status == s))
            .filter(|p| match &keyword {
                Some(kw) => {
                    p.name.to_lowercase().contains(kw)
                        || p
                            .description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(kw))
                }
                None => true,
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matches.len() as i64;
        // i64 math: page is only bounded below, so i32 multiply can overflow.
        let offset = (req.page as i64 - 1).saturating_mul(req.page_size as i64).max(0) as usize;
        let page = matches
            .into_iter()
            .skip(offset)
            .take(req.page_size as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        Ok(self.products.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryProductRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let now = Utc::now();
        let product = Product {
            product_id: Uuid::new_v4(),
            name: req.name.clone(),
            price: req.price,
            stock: req.stock,
            description: req.description.clone(),
            image_url: req.image_url.clone(),
            status: req.status,
            created_at: now,
            updated_at: now,
        };

        self.products
            .write()
            .await
            .insert(product.product_id, product.clone());

        Ok(product)
    }

    async fn update(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError> {
        let mut store = self.products.write().await;
        let product = store
            .get_mut(&req.product_id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = &req.name {
            product.name = name.clone();
        }
        if let Some(price) = req.price {
            product.price = price;
        }
        if let Some(stock) = req.stock {
            product.stock = stock;
        }
        if let Some(description) = &req.description {
            product.description = Some(description.clone());
        }
        if let Some(image_url) = &req.image_url {
            product.image_url = Some(image_url.clone());
        }
        if let Some(status) = req.status {
            product.status = status;
        }
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.products
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
