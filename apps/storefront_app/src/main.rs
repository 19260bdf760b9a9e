// apps/storefront_app/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use storefront_app::store::{MemoryStore, PgStore, StorefrontStore};
use storefront_app::web::configure_app_routes;
use storefront_app::{AppConfig, AppState};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

/// How often the idle-session sweeper runs.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting storefront server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  let store: Arc<dyn StorefrontStore> = match &app_config.database_url {
    Some(url) => match PgStore::connect(url).await {
      Ok(pg) => Arc::new(pg),
      Err(e) => {
        tracing::error!(error = %e, "Failed to connect to the database.");
        return Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string()));
      }
    },
    None => {
      tracing::warn!("DATABASE_URL not set, using the in-memory store. Published settings will not survive a restart.");
      Arc::new(MemoryStore::new())
    }
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  let app_state = AppState::new(app_config, store);

  // Sessions live in memory; drop the ones nobody has touched for a while.
  let sessions = app_state.sessions.clone();
  let max_idle = app_state.config.session_idle_timeout;
  actix_web::rt::spawn(async move {
    let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
    loop {
      ticker.tick().await;
      sessions.purge_idle(max_idle);
    }
  });

  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .configure(configure_app_routes)
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
  })
  .bind(&server_address)?
  .run()
  .await
}
