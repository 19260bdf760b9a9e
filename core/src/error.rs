// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
  #[error("Unknown icon name: '{name}'")]
  UnknownIcon { name: String },

  #[error("Invalid theme colour for '{field}': '{value}' (expected #RGB or #RRGGBB)")]
  InvalidThemeColor { field: &'static str, value: String },

  #[error("Invalid review rating {rating} (expected 1 to 5)")]
  InvalidRating { rating: i32 },

  #[error("No preview is active for {kind}")]
  NoActivePreview { kind: &'static str },

  #[error("Publishing the {kind} draft failed. Source: {source}")]
  Publish {
    kind: &'static str,
    #[source]
    source: AnyhowError,
  },
}

impl StorefrontError {
  /// True for errors caused by bad input rather than by a collaborator.
  pub fn is_validation(&self) -> bool {
    matches!(
      self,
      StorefrontError::UnknownIcon { .. }
        | StorefrontError::InvalidThemeColor { .. }
        | StorefrontError::InvalidRating { .. }
    )
  }
}

pub type StorefrontResult<T, E = StorefrontError> = std::result::Result<T, E>;
