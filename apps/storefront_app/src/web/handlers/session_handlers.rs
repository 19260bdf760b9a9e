// apps/storefront_app/src/web/handlers/session_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::CurrentSession;

#[instrument(name = "handler::create_session", skip(app_state))]
pub async fn create_session_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let (session_id, _) = app_state.sessions.create();
  info!(%session_id, active_sessions = app_state.sessions.len(), "Session started.");
  Ok(HttpResponse::Created().json(json!({ "sessionId": session_id })))
}

#[instrument(name = "handler::end_session", skip(app_state, session), fields(session_id = %session.id))]
pub async fn end_session_handler(
  app_state: web::Data<AppState>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  app_state.sessions.remove(session.id);
  info!("Session ended, cart and drafts discarded.");
  Ok(HttpResponse::NoContent().finish())
}
