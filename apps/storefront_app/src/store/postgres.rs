// apps/storefront_app/src/store/postgres.rs

use super::{ProductFilter, StorefrontStore};
use crate::errors::{AppError, Result};
use crate::models::{CategoryRow, ProductRow, PromotionRow, ReviewRow, SettingsKey, SettingsRow};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use storefront::{Category, Product, Promotion, Review};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

const PRODUCT_COLUMNS: &str = "p.id, p.name, p.description, p.price_cents, p.sale_price_cents, p.image_url, \
   p.category_id, p.is_featured, p.is_active, p.created_at, p.updated_at";

#[derive(Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn connect(database_url: &str) -> Result<Self> {
    let pool = PgPool::connect(database_url).await?;
    info!("Successfully connected to the database.");
    Ok(Self::new(pool))
  }
}

#[async_trait]
impl StorefrontStore for PgStore {
  #[instrument(name = "PgStore::list_products", skip(self))]
  async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
    let sql = format!(
      "SELECT {} FROM products p LEFT JOIN categories c ON c.id = p.category_id \
       WHERE p.is_active \
         AND ($1::text IS NULL OR c.slug = $1) \
         AND ($2::bool IS NULL OR p.is_featured = $2) \
       ORDER BY p.is_featured DESC, p.name ASC",
      PRODUCT_COLUMNS
    );
    let rows: Vec<ProductRow> = sqlx::query_as(&sql)
      .bind(filter.category.as_deref())
      .bind(filter.featured)
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to fetch products from database: {}", e);
        AppError::Sqlx(e)
      })?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "PgStore::get_product", skip(self))]
  async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
    let sql = format!("SELECT {} FROM products p WHERE p.id = $1", PRODUCT_COLUMNS);
    let row: Option<ProductRow> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
    Ok(row.map(Product::from))
  }

  #[instrument(name = "PgStore::list_categories", skip(self))]
  async fn list_categories(&self) -> Result<Vec<Category>> {
    let rows: Vec<CategoryRow> = sqlx::query_as(
      "SELECT id, name, slug, icon, description, sort_order FROM categories ORDER BY sort_order ASC, name ASC",
    )
    .fetch_all(&self.pool)
    .await?;

    // A row with an icon outside the supported table is skipped, not fatal.
    let mut categories = Vec::with_capacity(rows.len());
    for row in rows {
      let slug = row.slug.clone();
      match Category::try_from(row) {
        Ok(category) => categories.push(category),
        Err(e) => warn!(category = %slug, error = %e, "Skipping category with unsupported icon."),
      }
    }
    Ok(categories)
  }

  #[instrument(name = "PgStore::list_promotions", skip(self))]
  async fn list_promotions(&self) -> Result<Vec<Promotion>> {
    let rows: Vec<PromotionRow> = sqlx::query_as(
      "SELECT id, title, description, badge, image_url, starts_at, ends_at, is_active \
       FROM promotions ORDER BY starts_at DESC NULLS LAST, title ASC",
    )
    .fetch_all(&self.pool)
    .await?;
    Ok(rows.into_iter().map(Promotion::from).collect())
  }

  #[instrument(name = "PgStore::list_reviews", skip(self))]
  async fn list_reviews(&self) -> Result<Vec<Review>> {
    let rows: Vec<ReviewRow> = sqlx::query_as(
      "SELECT id, author_name, rating, comment, is_approved FROM reviews WHERE is_approved ORDER BY created_at DESC",
    )
    .fetch_all(&self.pool)
    .await?;

    let mut reviews = Vec::with_capacity(rows.len());
    for row in rows {
      let id = row.id;
      match Review::try_from(row) {
        Ok(review) => reviews.push(review),
        Err(e) => warn!(review_id = %id, error = %e, "Skipping review with invalid rating."),
      }
    }
    Ok(reviews)
  }

  #[instrument(name = "PgStore::load_setting", skip(self), fields(key = key.as_str()))]
  async fn load_setting(&self, key: SettingsKey) -> Result<Option<Value>> {
    let row: Option<SettingsRow> = sqlx::query_as("SELECT key, value, updated_at FROM site_settings WHERE key = $1")
      .bind(key.as_str())
      .fetch_optional(&self.pool)
      .await?;
    Ok(row.map(|r| r.value.0))
  }

  #[instrument(name = "PgStore::save_setting", skip(self, value), fields(key = key.as_str()))]
  async fn save_setting(&self, key: SettingsKey, value: Value) -> Result<()> {
    sqlx::query(
      "INSERT INTO site_settings (key, value, updated_at) VALUES ($1, $2, NOW()) \
       ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
    )
    .bind(key.as_str())
    .bind(Json(value))
    .execute(&self.pool)
    .await
    .map_err(|e| {
      error!("Failed to write settings row: {}", e);
      AppError::Sqlx(e)
    })?;
    info!("Settings row written.");
    Ok(())
  }
}
