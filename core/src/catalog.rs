// core/src/catalog.rs

//! Presentation shapes for the catalogue. These are what the HTTP layer
//! serializes (camelCase); the persisted snake_case rows live next to the
//! database code and convert into these.

use crate::error::{StorefrontError, StorefrontResult};
use crate::icon::Icon;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  pub price_cents: i64,
  pub sale_price_cents: Option<i64>,
  pub image_url: Option<String>,
  pub category_id: Option<Uuid>,
  #[serde(default)]
  pub is_featured: bool,
  #[serde(default = "default_true")]
  pub is_active: bool,
}

fn default_true() -> bool {
  true
}

impl Product {
  pub fn new(id: Uuid, name: impl Into<String>, price_cents: i64) -> Self {
    Self {
      id,
      name: name.into(),
      description: None,
      price_cents,
      sale_price_cents: None,
      image_url: None,
      category_id: None,
      is_featured: false,
      is_active: true,
    }
  }

  pub fn with_sale_price(mut self, sale_price_cents: i64) -> Self {
    self.sale_price_cents = Some(sale_price_cents);
    self
  }

  /// The price a customer pays per unit: the sale price when one is set.
  pub fn unit_price_cents(&self) -> i64 {
    self.sale_price_cents.unwrap_or(self.price_cents)
  }

  pub fn is_on_sale(&self) -> bool {
    self.sale_price_cents.is_some()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
  pub id: Uuid,
  pub name: String,
  pub slug: String,
  pub icon: Icon,
  pub description: Option<String>,
  #[serde(default)]
  pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
  pub id: Uuid,
  pub title: String,
  pub description: Option<String>,
  pub badge: Option<String>,
  pub image_url: Option<String>,
  pub starts_at: Option<DateTime<Utc>>,
  pub ends_at: Option<DateTime<Utc>>,
  pub is_active: bool,
}

impl Promotion {
  /// Active and inside its window. Missing bounds are open.
  pub fn is_current(&self, now: DateTime<Utc>) -> bool {
    self.is_active
      && self.starts_at.map_or(true, |start| start <= now)
      && self.ends_at.map_or(true, |end| now <= end)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
  pub id: Uuid,
  pub author_name: String,
  pub rating: u8,
  pub comment: String,
  pub is_approved: bool,
}

impl Review {
  /// Checks a raw rating coming from storage before it becomes a `Review`.
  pub fn checked_rating(rating: i32) -> StorefrontResult<u8> {
    match rating {
      1..=5 => Ok(rating as u8),
      _ => Err(StorefrontError::InvalidRating { rating }),
    }
  }
}
