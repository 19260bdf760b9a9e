// core/src/session.rs

//! Per-visitor state. A `Session` owns the cart and the two preview
//! controllers; the `SessionStore` hands out shared handles to sessions by id.
//! Nothing here is persisted, so a restart starts every visitor over.

use crate::cart::Cart;
use crate::content::{SeasonalTheme, SiteContent};
use crate::preview::PreviewController;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

/// Which preview bar to show. Only one renders at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewBanner {
  Theme,
  Content,
}

#[derive(Debug)]
pub struct Session {
  pub id: Uuid,
  pub cart: Cart,
  pub theme_preview: PreviewController<SeasonalTheme>,
  pub content_preview: PreviewController<SiteContent>,
  last_seen: Instant,
}

impl Session {
  pub fn new(id: Uuid) -> Self {
    Self {
      id,
      cart: Cart::new(),
      theme_preview: PreviewController::new("theme"),
      content_preview: PreviewController::new("content"),
      last_seen: Instant::now(),
    }
  }

  /// Both drafts may exist at once; the theme bar wins.
  pub fn active_banner(&self) -> Option<PreviewBanner> {
    if self.theme_preview.is_active() {
      Some(PreviewBanner::Theme)
    } else if self.content_preview.is_active() {
      Some(PreviewBanner::Content)
    } else {
      None
    }
  }

  pub fn touch(&mut self) {
    self.last_seen = Instant::now();
  }

  pub fn idle_for(&self) -> Duration {
    self.last_seen.elapsed()
  }
}

/// Shared handle to one session.
///
/// Guards are blocking and MUST NOT be held across `.await` points.
#[derive(Debug, Clone)]
pub struct SessionHandle(Arc<RwLock<Session>>);

impl SessionHandle {
  fn new(session: Session) -> Self {
    SessionHandle(Arc::new(RwLock::new(session)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, Session> {
    self.0.read()
  }

  /// Marks the session as in use without changing it.
  pub fn touch(&self) {
    self.0.write().touch();
  }

  /// Write access also refreshes the idle timer.
  pub fn write(&self) -> RwLockWriteGuard<'_, Session> {
    let mut guard = self.0.write();
    guard.touch();
    guard
  }
}

#[derive(Debug, Default)]
pub struct SessionStore {
  sessions: RwLock<HashMap<Uuid, SessionHandle>>,
}

impl SessionStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn create(&self) -> (Uuid, SessionHandle) {
    let id = Uuid::new_v4();
    let handle = SessionHandle::new(Session::new(id));
    self.sessions.write().insert(id, handle.clone());
    debug!(session_id = %id, "Session created.");
    (id, handle)
  }

  pub fn get(&self, id: Uuid) -> Option<SessionHandle> {
    self.sessions.read().get(&id).cloned()
  }

  pub fn remove(&self, id: Uuid) -> bool {
    self.sessions.write().remove(&id).is_some()
  }

  pub fn len(&self) -> usize {
    self.sessions.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.sessions.read().is_empty()
  }

  /// Drops sessions that have not been touched for `max_idle`.
  /// Returns how many were removed.
  pub fn purge_idle(&self, max_idle: Duration) -> usize {
    let mut sessions = self.sessions.write();
    let before = sessions.len();
    sessions.retain(|_, handle| handle.read().idle_for() < max_idle);
    let removed = before - sessions.len();
    if removed > 0 {
      info!(removed, remaining = sessions.len(), "Purged idle sessions.");
    }
    removed
  }
}
