// apps/storefront_app/src/state.rs
use crate::config::AppConfig;
use crate::services::StorePublisher;
use crate::store::StorefrontStore;
use std::sync::Arc;
use storefront::{CheckoutSettings, SessionStore};

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn StorefrontStore>,
  pub publisher: StorePublisher,
  pub sessions: Arc<SessionStore>,
  pub checkout: Arc<CheckoutSettings>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(config: AppConfig, store: Arc<dyn StorefrontStore>) -> Self {
    Self {
      publisher: StorePublisher::new(store.clone()),
      store,
      sessions: Arc::new(SessionStore::new()),
      checkout: Arc::new(config.checkout_settings()),
      config: Arc::new(config),
    }
  }
}
