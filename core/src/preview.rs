// core/src/preview.rs

//! Draft preview / publish for site-wide settings.
//!
//! A `PreviewController<T>` holds at most one uncommitted draft of `T`. While
//! the draft exists, readers use `effective()` to render it in place of the
//! persisted value. The draft ends either by `cancel_preview` (nothing is
//! written) or by a successful `publish_preview` followed by
//! `complete_publish`.
//!
//! The same controller type serves the seasonal theme and the site content.

use crate::error::{StorefrontError, StorefrontResult};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info, instrument, warn};

/// Writes a committed value to wherever the persisted settings live.
#[async_trait]
pub trait Publisher<T: Sync>: Send + Sync {
  async fn publish(&self, value: &T) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSession<T> {
  pub draft: T,
  pub return_url: String,
  revision: u64,
}

/// Serializable snapshot of a controller, e.g. for the admin preview bar.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewState<'a, T> {
  pub is_active: bool,
  pub draft_payload: Option<&'a T>,
  pub return_url: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct PreviewController<T> {
  kind: &'static str,
  session: Option<PreviewSession<T>>,
  next_revision: u64,
}

impl<T> PreviewController<T> {
  /// `kind` names the settings being previewed ("theme", "content") in logs and errors.
  pub fn new(kind: &'static str) -> Self {
    Self {
      kind,
      session: None,
      next_revision: 1,
    }
  }

  pub fn kind(&self) -> &'static str {
    self.kind
  }

  pub fn is_active(&self) -> bool {
    self.session.is_some()
  }

  pub fn draft(&self) -> Option<&T> {
    self.session.as_ref().map(|s| &s.draft)
  }

  pub fn return_url(&self) -> Option<&str> {
    self.session.as_ref().map(|s| s.return_url.as_str())
  }

  /// Identifies the current draft; every `enter_preview` gets a new one.
  pub fn revision(&self) -> Option<u64> {
    self.session.as_ref().map(|s| s.revision)
  }

  pub fn state(&self) -> PreviewState<'_, T> {
    PreviewState {
      is_active: self.is_active(),
      draft_payload: self.draft(),
      return_url: self.return_url(),
    }
  }

  /// Starts (or replaces) the preview. Any previous draft is dropped without merging.
  pub fn enter_preview(&mut self, payload: T, return_url: impl Into<String>) {
    let revision = self.next_revision;
    self.next_revision += 1;
    if self.session.is_some() {
      info!(kind = self.kind, revision, "Replacing active preview draft.");
    } else {
      info!(kind = self.kind, revision, "Entering preview.");
    }
    self.session = Some(PreviewSession {
      draft: payload,
      return_url: return_url.into(),
      revision,
    });
  }

  /// Discards the draft. Returns the URL the caller should navigate back to,
  /// or `None` when no preview was active.
  pub fn cancel_preview(&mut self) -> Option<String> {
    let session = self.session.take()?;
    info!(kind = self.kind, revision = session.revision, "Preview cancelled, draft discarded.");
    Some(session.return_url)
  }

  /// Ends the preview after a successful publish of `published_revision`.
  ///
  /// If the admin entered a newer draft while the write was in flight, that
  /// draft is kept and `None` is returned.
  pub fn complete_publish(&mut self, published_revision: u64) -> Option<String> {
    match &self.session {
      Some(session) if session.revision == published_revision => self.session.take().map(|s| s.return_url),
      Some(session) => {
        warn!(
          kind = self.kind,
          published_revision,
          current_revision = session.revision,
          "Draft changed while publishing, keeping the newer draft."
        );
        None
      }
      None => None,
    }
  }

  /// The value to render: the draft while previewing, otherwise `persisted`.
  pub fn effective<'a>(&'a self, persisted: &'a T) -> &'a T {
    self.draft().unwrap_or(persisted)
  }
}

impl<T: Sync> PreviewController<T> {
  /// Writes the draft through `publisher`. The draft is left in place either
  /// way: on success the caller finishes with `complete_publish`, on failure
  /// the admin can retry without re-entering anything.
  #[instrument(name = "PreviewController::try_publish", skip_all, fields(kind = self.kind))]
  pub async fn try_publish<P>(&self, publisher: &P) -> StorefrontResult<u64>
  where
    P: Publisher<T> + ?Sized,
  {
    let session = self
      .session
      .as_ref()
      .ok_or(StorefrontError::NoActivePreview { kind: self.kind })?;

    publisher
      .publish(&session.draft)
      .await
      .map_err(|source| StorefrontError::Publish { kind: self.kind, source })?;

    info!(revision = session.revision, "Draft published.");
    Ok(session.revision)
  }

  /// Boolean form of `try_publish`; the failure is logged, never propagated.
  pub async fn publish_preview<P>(&self, publisher: &P) -> bool
  where
    P: Publisher<T> + ?Sized,
  {
    match self.try_publish(publisher).await {
      Ok(_) => true,
      Err(e) => {
        error!(kind = self.kind, error = %e, "Publishing preview failed; draft retained.");
        false
      }
    }
  }
}
