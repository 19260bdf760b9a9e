// apps/storefront_app/src/web/handlers/content_handlers.rs

//! Public reads of the site-wide settings. A session that is previewing a
//! draft gets the draft; everyone else gets the published value.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{debug, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::store;
use crate::web::extractors::MaybeSession;

#[instrument(name = "handler::get_content", skip_all)]
pub async fn get_content_handler(
  app_state: web::Data<AppState>,
  session: MaybeSession,
) -> Result<HttpResponse, AppError> {
  let persisted = store::load_content(app_state.store.as_ref()).await?;

  let body = match &session.0 {
    Some(current) => {
      let guard = current.handle.read();
      let preview = &guard.content_preview;
      debug!(session_id = %current.id, previewing = preview.is_active(), "Resolving effective content.");
      json!({ "content": preview.effective(&persisted), "isPreview": preview.is_active() })
    }
    None => json!({ "content": persisted, "isPreview": false }),
  };
  Ok(HttpResponse::Ok().json(body))
}

#[instrument(name = "handler::get_theme", skip_all)]
pub async fn get_theme_handler(
  app_state: web::Data<AppState>,
  session: MaybeSession,
) -> Result<HttpResponse, AppError> {
  let persisted = store::load_theme(app_state.store.as_ref()).await?;

  let body = match &session.0 {
    Some(current) => {
      let guard = current.handle.read();
      let preview = &guard.theme_preview;
      debug!(session_id = %current.id, previewing = preview.is_active(), "Resolving effective theme.");
      json!({ "theme": preview.effective(&persisted), "isPreview": preview.is_active() })
    }
    None => json!({ "theme": persisted, "isPreview": false }),
  };
  Ok(HttpResponse::Ok().json(body))
}
