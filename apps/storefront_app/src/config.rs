// apps/storefront_app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use storefront::checkout::{
  CheckoutSettings, DEFAULT_CURRENCY_SYMBOL, DEFAULT_WHATSAPP_BASE_URL, DEFAULT_WHATSAPP_NUMBER,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// `None` runs the shop on the in-memory store (local development).
  pub database_url: Option<String>,
  /// Shared secret the admin panel sends in `X-Admin-Token`.
  pub admin_token: String,

  pub whatsapp_base_url: String,
  pub whatsapp_default_number: String,
  pub currency_symbol: String,

  pub session_idle_timeout: Duration,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| {
      lookup(var_name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL").ok();
    let admin_token = get_env("ADMIN_TOKEN")?;

    let whatsapp_base_url = get_env("WHATSAPP_BASE_URL").unwrap_or_else(|_| DEFAULT_WHATSAPP_BASE_URL.to_string());
    let whatsapp_default_number =
      get_env("WHATSAPP_DEFAULT_NUMBER").unwrap_or_else(|_| DEFAULT_WHATSAPP_NUMBER.to_string());
    if storefront::clean_phone_number(&whatsapp_default_number).is_empty() {
      return Err(AppError::Config(format!(
        "WHATSAPP_DEFAULT_NUMBER has no digits: '{}'",
        whatsapp_default_number
      )));
    }
    let currency_symbol = get_env("CURRENCY_SYMBOL").unwrap_or_else(|_| DEFAULT_CURRENCY_SYMBOL.to_string());

    let idle_minutes = get_env("SESSION_IDLE_MINUTES")
      .unwrap_or_else(|_| "120".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid SESSION_IDLE_MINUTES: {}", e)))?;
    let idle_secs = idle_minutes
      .checked_mul(60)
      .ok_or_else(|| AppError::Config(format!("SESSION_IDLE_MINUTES is too large: {}", idle_minutes)))?;

    tracing::info!(
      database = database_url.is_some(),
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      admin_token,
      whatsapp_base_url,
      whatsapp_default_number,
      currency_symbol,
      session_idle_timeout: Duration::from_secs(idle_secs),
    })
  }

  pub fn checkout_settings(&self) -> CheckoutSettings {
    CheckoutSettings {
      base_url: self.whatsapp_base_url.clone(),
      default_number: self.whatsapp_default_number.clone(),
      currency_symbol: self.currency_symbol.clone(),
      ..CheckoutSettings::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| map.get(name).cloned()
  }

  #[test]
  fn defaults_apply_when_only_admin_token_is_set() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("ADMIN_TOKEN", "secret")])).unwrap();
    assert_eq!(cfg.server_host, "127.0.0.1");
    assert_eq!(cfg.server_port, 8080);
    assert!(cfg.database_url.is_none());
    assert_eq!(cfg.whatsapp_base_url, "https://wa.me");
    assert_eq!(cfg.whatsapp_default_number, "51932371532");
    assert_eq!(cfg.currency_symbol, "S/");
    assert_eq!(cfg.session_idle_timeout, Duration::from_secs(120 * 60));
  }

  #[test]
  fn admin_token_is_required() {
    let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("ADMIN_TOKEN")));
  }

  #[test]
  fn invalid_port_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("ADMIN_TOKEN", "x"), ("SERVER_PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("SERVER_PORT")));
  }

  #[test]
  fn huge_idle_minutes_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[
      ("ADMIN_TOKEN", "x"),
      ("SESSION_IDLE_MINUTES", "18446744073709551615"),
    ]))
    .unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("SESSION_IDLE_MINUTES")));
  }

  #[test]
  fn default_number_needs_digits() {
    let err = AppConfig::from_lookup(lookup_from(&[
      ("ADMIN_TOKEN", "x"),
      ("WHATSAPP_DEFAULT_NUMBER", "call us"),
    ]))
    .unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
  }

  #[test]
  fn checkout_settings_carry_overrides() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
      ("ADMIN_TOKEN", "x"),
      ("CURRENCY_SYMBOL", "$"),
      ("WHATSAPP_DEFAULT_NUMBER", "+1 555 0100"),
      ("DATABASE_URL", "postgres://localhost/shop"),
    ]))
    .unwrap();
    let settings = cfg.checkout_settings();
    assert_eq!(settings.currency_symbol, "$");
    assert_eq!(settings.default_number, "+1 555 0100");
    assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/shop"));
  }
}
