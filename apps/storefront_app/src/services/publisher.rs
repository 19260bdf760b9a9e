// apps/storefront_app/src/services/publisher.rs

//! Connects the preview controllers to the settings table: publishing a draft
//! is a write of the whole settings document.

use crate::models::SettingsKey;
use crate::store::StorefrontStore;
use async_trait::async_trait;
use std::sync::Arc;
use storefront::{Publisher, SeasonalTheme, SiteContent};

#[derive(Clone)]
pub struct StorePublisher {
  store: Arc<dyn StorefrontStore>,
}

impl StorePublisher {
  pub fn new(store: Arc<dyn StorefrontStore>) -> Self {
    Self { store }
  }
}

#[async_trait]
impl Publisher<SeasonalTheme> for StorePublisher {
  async fn publish(&self, value: &SeasonalTheme) -> anyhow::Result<()> {
    let document = serde_json::to_value(value)?;
    self.store.save_setting(SettingsKey::SeasonalTheme, document).await?;
    Ok(())
  }
}

#[async_trait]
impl Publisher<SiteContent> for StorePublisher {
  async fn publish(&self, value: &SiteContent) -> anyhow::Result<()> {
    let document = serde_json::to_value(value)?;
    self.store.save_setting(SettingsKey::SiteContent, document).await?;
    Ok(())
  }
}
