// apps/storefront_app/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use storefront::StorefrontError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Storefront Error: {0}")]
  Storefront(#[from] StorefrontError),

  #[error("Stored settings are malformed: {0}")]
  MalformedSettings(#[from] serde_json::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError for handlers that use `?`
// on store calls returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<sqlx::Error>() {
      Ok(sqlx_err) => AppError::Sqlx(sqlx_err),
      Err(err) => match err.downcast::<serde_json::Error>() {
        Ok(json_err) => AppError::MalformedSettings(json_err),
        Err(err) => AppError::Internal(err.to_string()),
      },
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      AppError::Storefront(source) if source.is_validation() => {
        HttpResponse::BadRequest().json(json!({"error": source.to_string()}))
      }
      AppError::Storefront(StorefrontError::NoActivePreview { kind }) => {
        HttpResponse::Conflict().json(json!({"error": format!("No {} preview is active.", kind)}))
      }
      AppError::Storefront(StorefrontError::Publish { kind, .. }) => HttpResponse::BadGateway().json(json!({
        "error": format!("Could not publish the {} draft.", kind),
        "published": false,
        "detail": self.to_string()
      })),
      AppError::Storefront(source) => {
        HttpResponse::InternalServerError().json(json!({"error": "Storefront error", "detail": source.to_string()}))
      }
      AppError::MalformedSettings(e) => {
        HttpResponse::InternalServerError().json(json!({"error": "Stored settings are malformed", "detail": e.to_string()}))
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
