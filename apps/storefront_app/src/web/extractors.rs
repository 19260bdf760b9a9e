// apps/storefront_app/src/web/extractors.rs

//! Request extractors: the visitor's session and the admin guard.

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use storefront::SessionHandle;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

pub const SESSION_HEADER: &str = "X-Session-ID";
pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

fn app_state(req: &HttpRequest) -> Result<&web::Data<AppState>, AppError> {
  req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))
}

fn header_str<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
  req.headers().get(name).and_then(|value| value.to_str().ok())
}

/// The caller's session, looked up from the `X-Session-ID` header.
#[derive(Debug, Clone)]
pub struct CurrentSession {
  pub id: Uuid,
  pub handle: SessionHandle,
}

impl CurrentSession {
  fn extract(req: &HttpRequest) -> Result<Self, AppError> {
    let state = app_state(req)?;
    let raw = header_str(req, SESSION_HEADER)
      .ok_or_else(|| AppError::Validation(format!("Missing {} header.", SESSION_HEADER)))?;
    let id = Uuid::parse_str(raw.trim())
      .map_err(|_| AppError::Validation(format!("Invalid {} header.", SESSION_HEADER)))?;
    let handle = state.sessions.get(id).ok_or_else(|| {
      warn!(session_id = %id, "Unknown or expired session.");
      AppError::NotFound(format!("Session {} not found or expired.", id))
    })?;
    handle.touch();
    Ok(CurrentSession { id, handle })
  }
}

impl FromRequest for CurrentSession {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(Self::extract(req))
  }
}

/// Like `CurrentSession`, but public reads work without one: a missing,
/// malformed or expired session id simply yields `None`.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<CurrentSession>);

impl FromRequest for MaybeSession {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(Ok(MaybeSession(CurrentSession::extract(req).ok())))
  }
}

/// Admin-only routes. The shared token stands in for the hosted auth
/// provider's admin check.
#[derive(Debug)]
pub struct AdminGuard;

impl FromRequest for AdminGuard {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let result = app_state(req).and_then(|state| match header_str(req, ADMIN_TOKEN_HEADER) {
      Some(token) if token == state.config.admin_token => Ok(AdminGuard),
      Some(_) => {
        warn!("AdminGuard extractor: wrong admin token.");
        Err(AppError::Auth("Invalid admin token.".to_string()))
      }
      None => Err(AppError::Auth(format!("Missing {} header.", ADMIN_TOKEN_HEADER))),
    });
    ready(result)
  }
}
