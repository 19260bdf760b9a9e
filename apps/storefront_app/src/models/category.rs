// apps/storefront_app/src/models/category.rs

use sqlx::FromRow;
use storefront::{Category, StorefrontError};
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
  pub id: Uuid,
  pub name: String,
  pub slug: String,
  pub icon: String,
  pub description: Option<String>,
  pub sort_order: i32,
}

impl TryFrom<CategoryRow> for Category {
  type Error = StorefrontError;

  fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
    Ok(Category {
      id: row.id,
      name: row.name,
      slug: row.slug,
      icon: row.icon.parse()?,
      description: row.description,
      sort_order: row.sort_order,
    })
  }
}
