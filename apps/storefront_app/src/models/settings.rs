// apps/storefront_app/src/models/settings.rs

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

/// Rows of the `site_settings` key/value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsKey {
  SeasonalTheme,
  SiteContent,
}

impl SettingsKey {
  pub fn as_str(self) -> &'static str {
    match self {
      SettingsKey::SeasonalTheme => "seasonal_theme",
      SettingsKey::SiteContent => "site_content",
    }
  }
}

#[derive(Debug, Clone, FromRow)]
pub struct SettingsRow {
  pub key: String,
  pub value: Json<Value>,
  pub updated_at: DateTime<Utc>,
}
