// apps/storefront_app/src/store/mod.rs

//! Persistence behind the storefront: catalogue reads and the two settings
//! documents (seasonal theme, site content) that admins publish.

use crate::errors::Result;
use crate::models::SettingsKey;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use storefront::{Category, Product, Promotion, Review, SeasonalTheme, SiteContent};
use tracing::warn;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Query-string filter for the product grid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
  /// Category slug.
  pub category: Option<String>,
  pub featured: Option<bool>,
}

#[async_trait]
pub trait StorefrontStore: Send + Sync {
  /// Active products only, featured first, then by name.
  async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>>;
  async fn get_product(&self, id: Uuid) -> Result<Option<Product>>;
  async fn list_categories(&self) -> Result<Vec<Category>>;
  /// Every promotion row; callers decide which are current.
  async fn list_promotions(&self) -> Result<Vec<Promotion>>;
  /// Approved reviews only.
  async fn list_reviews(&self) -> Result<Vec<Review>>;
  async fn load_setting(&self, key: SettingsKey) -> Result<Option<Value>>;
  async fn save_setting(&self, key: SettingsKey, value: Value) -> Result<()>;
}

/// Reads one settings document. A missing row or one that no longer matches
/// the expected shape both yield the default; only store failures are errors.
async fn load_or_default<T>(store: &dyn StorefrontStore, key: SettingsKey) -> Result<T>
where
  T: DeserializeOwned + Default,
{
  let Some(value) = store.load_setting(key).await? else {
    return Ok(T::default());
  };
  match serde_json::from_value(value) {
    Ok(parsed) => Ok(parsed),
    Err(e) => {
      warn!(setting = key.as_str(), error = %e, "Stored setting is malformed, using the default.");
      Ok(T::default())
    }
  }
}

/// The published theme, or the built-in one if nothing usable was published.
pub async fn load_theme(store: &dyn StorefrontStore) -> Result<SeasonalTheme> {
  load_or_default(store, SettingsKey::SeasonalTheme).await
}

/// The published site content, or empty content if nothing usable was published.
pub async fn load_content(store: &dyn StorefrontStore) -> Result<SiteContent> {
  load_or_default(store, SettingsKey::SiteContent).await
}
