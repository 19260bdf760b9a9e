// apps/storefront_app/src/models/promotion.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use storefront::Promotion;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct PromotionRow {
  pub id: Uuid,
  pub title: String,
  pub description: Option<String>,
  pub badge: Option<String>,
  pub image_url: Option<String>,
  pub starts_at: Option<DateTime<Utc>>,
  pub ends_at: Option<DateTime<Utc>>,
  pub is_active: bool,
}

impl From<PromotionRow> for Promotion {
  fn from(row: PromotionRow) -> Self {
    Promotion {
      id: row.id,
      title: row.title,
      description: row.description,
      badge: row.badge,
      image_url: row.image_url,
      starts_at: row.starts_at,
      ends_at: row.ends_at,
      is_active: row.is_active,
    }
  }
}
