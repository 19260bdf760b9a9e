// apps/storefront_app/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use storefront::Product;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductRow {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>, // Description can be optional
  pub price_cents: i64,
  pub sale_price_cents: Option<i64>,
  pub image_url: Option<String>,
  pub category_id: Option<Uuid>,
  pub is_featured: bool,
  pub is_active: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.name,
      description: row.description,
      price_cents: row.price_cents,
      sale_price_cents: row.sale_price_cents,
      image_url: row.image_url,
      category_id: row.category_id,
      is_featured: row.is_featured,
      is_active: row.is_active,
    }
  }
}
