// apps/storefront_app/src/models/review.rs

use sqlx::FromRow;
use storefront::{Review, StorefrontError};
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct ReviewRow {
  pub id: Uuid,
  pub author_name: String,
  pub rating: i32,
  pub comment: String,
  pub is_approved: bool,
}

impl TryFrom<ReviewRow> for Review {
  type Error = StorefrontError;

  fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
    Ok(Review {
      id: row.id,
      author_name: row.author_name,
      rating: Review::checked_rating(row.rating)?,
      comment: row.comment,
      is_approved: row.is_approved,
    })
  }
}
