// apps/storefront_app/src/web/handlers/preview_handlers.rs

//! Admin draft previews for the seasonal theme and the site content.
//!
//! Drafts live in the admin's session only. Publishing writes the draft to the
//! settings table; on failure the draft stays so the admin can retry.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Value};
use storefront::{PreviewController, Publisher, SeasonalTheme, Session, SessionHandle, SiteContent};
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::services::StorePublisher;
use crate::state::AppState;
use crate::web::extractors::{AdminGuard, CurrentSession};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
  Theme,
  Content,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnterPreviewRequestPayload {
  pub payload: Value,
  pub return_url: String,
}

fn theme_controller(session: &mut Session) -> &mut PreviewController<SeasonalTheme> {
  &mut session.theme_preview
}

fn content_controller(session: &mut Session) -> &mut PreviewController<SiteContent> {
  &mut session.content_preview
}

#[instrument(name = "handler::preview_status", skip_all, fields(session_id = %session.id))]
pub async fn preview_status_handler(_admin: AdminGuard, session: CurrentSession) -> Result<HttpResponse, AppError> {
  let guard = session.handle.read();
  Ok(HttpResponse::Ok().json(json!({
    "banner": guard.active_banner(),
    "theme": guard.theme_preview.state(),
    "content": guard.content_preview.state(),
  })))
}

#[instrument(
    name = "handler::enter_preview",
    skip(_admin, session, req_payload),
    fields(session_id = %session.id, return_url = %req_payload.return_url)
)]
pub async fn enter_preview_handler(
  _admin: AdminGuard,
  session: CurrentSession,
  kind: web::Path<PreviewKind>,
  req_payload: web::Json<EnterPreviewRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let EnterPreviewRequestPayload { payload, return_url } = req_payload.into_inner();

  match kind.into_inner() {
    PreviewKind::Theme => {
      let theme: SeasonalTheme = serde_json::from_value(payload)
        .map_err(|e| AppError::Validation(format!("Invalid theme payload: {}", e)))?;
      theme.validate()?;
      session.handle.write().theme_preview.enter_preview(theme, return_url);
    }
    PreviewKind::Content => {
      let content: SiteContent = serde_json::from_value(payload)
        .map_err(|e| AppError::Validation(format!("Invalid content payload: {}", e)))?;
      session.handle.write().content_preview.enter_preview(content, return_url);
    }
  }

  info!("Preview entered.");
  let guard = session.handle.read();
  Ok(HttpResponse::Ok().json(json!({ "banner": guard.active_banner() })))
}

#[instrument(name = "handler::cancel_preview", skip(_admin, session), fields(session_id = %session.id))]
pub async fn cancel_preview_handler(
  _admin: AdminGuard,
  session: CurrentSession,
  kind: web::Path<PreviewKind>,
) -> Result<HttpResponse, AppError> {
  let return_url = {
    let mut guard = session.handle.write();
    match kind.into_inner() {
      PreviewKind::Theme => guard.theme_preview.cancel_preview(),
      PreviewKind::Content => guard.content_preview.cancel_preview(),
    }
  };
  if return_url.is_none() {
    warn!("Cancel requested with no active preview.");
  }
  Ok(HttpResponse::Ok().json(json!({ "returnUrl": return_url })))
}

#[instrument(name = "handler::publish_preview", skip(_admin, app_state, session), fields(session_id = %session.id))]
pub async fn publish_preview_handler(
  _admin: AdminGuard,
  app_state: web::Data<AppState>,
  session: CurrentSession,
  kind: web::Path<PreviewKind>,
) -> Result<HttpResponse, AppError> {
  let return_url = match kind.into_inner() {
    PreviewKind::Theme => publish_draft(&app_state.publisher, &session.handle, theme_controller).await?,
    PreviewKind::Content => publish_draft(&app_state.publisher, &session.handle, content_controller).await?,
  };
  Ok(HttpResponse::Ok().json(json!({ "published": true, "returnUrl": return_url })))
}

/// Publishes a snapshot of the selected draft, then ends the preview if the
/// draft was not replaced in the meantime.
async fn publish_draft<T>(
  publisher: &StorePublisher,
  handle: &SessionHandle,
  select: fn(&mut Session) -> &mut PreviewController<T>,
) -> Result<Option<String>, AppError>
where
  T: Clone + Sync,
  StorePublisher: Publisher<T>,
{
  let snapshot = {
    let mut guard = handle.write();
    select(&mut *guard).clone()
  };

  let revision = match snapshot.try_publish(publisher).await {
    Ok(revision) => revision,
    Err(e) => {
      error!(kind = snapshot.kind(), error = %e, "Publish failed; draft retained for retry.");
      return Err(e.into());
    }
  };

  let mut guard = handle.write();
  Ok(select(&mut *guard).complete_publish(revision))
}
