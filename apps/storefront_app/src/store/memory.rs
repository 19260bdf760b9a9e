// apps/storefront_app/src/store/memory.rs

use super::{ProductFilter, StorefrontStore};
use crate::errors::{AppError, Result};
use crate::models::SettingsKey;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use storefront::{Category, Product, Promotion, Review};
use tracing::{info, warn};
use uuid::Uuid;

/// In-process store used when no database is configured, and by the tests.
#[derive(Default)]
pub struct MemoryStore {
  products: RwLock<Vec<Product>>,
  categories: RwLock<Vec<Category>>,
  promotions: RwLock<Vec<Promotion>>,
  reviews: RwLock<Vec<Review>>,
  settings: RwLock<HashMap<SettingsKey, Value>>,
  fail_writes: AtomicBool,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert_product(&self, product: Product) {
    self.products.write().push(product);
  }

  pub fn insert_category(&self, category: Category) {
    self.categories.write().push(category);
  }

  pub fn insert_promotion(&self, promotion: Promotion) {
    self.promotions.write().push(promotion);
  }

  pub fn insert_review(&self, review: Review) {
    self.reviews.write().push(review);
  }

  /// Makes every `save_setting` fail until switched back, to exercise publish failures.
  pub fn set_fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }

  pub fn setting(&self, key: SettingsKey) -> Option<Value> {
    self.settings.read().get(&key).cloned()
  }
}

#[async_trait]
impl StorefrontStore for MemoryStore {
  async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
    let category_id = match &filter.category {
      Some(slug) => match self.categories.read().iter().find(|c| &c.slug == slug) {
        Some(category) => Some(category.id),
        None => return Ok(Vec::new()),
      },
      None => None,
    };

    let mut products: Vec<Product> = self
      .products
      .read()
      .iter()
      .filter(|p| p.is_active)
      .filter(|p| category_id.map_or(true, |id| p.category_id == Some(id)))
      .filter(|p| filter.featured.map_or(true, |featured| p.is_featured == featured))
      .cloned()
      .collect();
    products.sort_by(|a, b| b.is_featured.cmp(&a.is_featured).then_with(|| a.name.cmp(&b.name)));
    Ok(products)
  }

  async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
    Ok(self.products.read().iter().find(|p| p.id == id).cloned())
  }

  async fn list_categories(&self) -> Result<Vec<Category>> {
    let mut categories = self.categories.read().clone();
    categories.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));
    Ok(categories)
  }

  async fn list_promotions(&self) -> Result<Vec<Promotion>> {
    Ok(self.promotions.read().clone())
  }

  async fn list_reviews(&self) -> Result<Vec<Review>> {
    Ok(self.reviews.read().iter().filter(|r| r.is_approved).cloned().collect())
  }

  async fn load_setting(&self, key: SettingsKey) -> Result<Option<Value>> {
    Ok(self.setting(key))
  }

  async fn save_setting(&self, key: SettingsKey, value: Value) -> Result<()> {
    if self.fail_writes.load(Ordering::SeqCst) {
      warn!(key = key.as_str(), "Simulated settings write failure.");
      return Err(AppError::Internal("Simulated settings write failure".to_string()));
    }
    self.settings.write().insert(key, value);
    info!(key = key.as_str(), "Settings row written (memory).");
    Ok(())
  }
}
