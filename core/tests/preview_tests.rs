// tests/preview_tests.rs
mod common;

use common::*;
use std::sync::atomic::Ordering;
use storefront::{PreviewController, SeasonalTheme, SiteContent, StorefrontError};

fn christmas() -> SeasonalTheme {
  SeasonalTheme {
    name: "navidad".into(),
    primary_color: "#b91c1c".into(),
    secondary_color: "#166534".into(),
    accent_color: "#facc15".into(),
    ..SeasonalTheme::default()
  }
}

#[test]
fn test_effective_value_follows_draft() {
  let persisted = SeasonalTheme::default();
  let mut controller = PreviewController::<SeasonalTheme>::new("theme");

  assert!(!controller.is_active());
  assert_eq!(controller.effective(&persisted), &persisted);

  controller.enter_preview(christmas(), "/admin/themes");
  assert!(controller.is_active());
  assert_eq!(controller.effective(&persisted).name, "navidad");
  assert_eq!(controller.return_url(), Some("/admin/themes"));
}

#[tokio::test]
async fn test_cancel_restores_persisted_without_writing() {
  setup_tracing();
  let store = RecordingPublisher::new(SeasonalTheme::default());
  let mut controller = PreviewController::<SeasonalTheme>::new("theme");

  controller.enter_preview(christmas(), "/admin/themes");
  let return_url = controller.cancel_preview();

  assert_eq!(return_url.as_deref(), Some("/admin/themes"));
  assert!(!controller.is_active());
  assert!(controller.draft().is_none());
  let persisted = store.persisted();
  assert_eq!(controller.effective(&persisted), &SeasonalTheme::default());
  assert_eq!(store.write_count(), 0);
}

#[test]
fn test_cancel_without_preview_returns_none() {
  let mut controller = PreviewController::<SiteContent>::new("content");
  assert_eq!(controller.cancel_preview(), None);
}

#[test]
fn test_enter_preview_overwrites_previous_draft() {
  let mut controller = PreviewController::<SeasonalTheme>::new("theme");
  controller.enter_preview(SeasonalTheme::default(), "/first");
  let first_revision = controller.revision().unwrap();

  controller.enter_preview(christmas(), "/second");
  assert_eq!(controller.draft().unwrap().name, "navidad");
  assert_eq!(controller.return_url(), Some("/second"));
  assert!(controller.revision().unwrap() > first_revision);
}

#[tokio::test]
async fn test_successful_publish_then_complete() {
  setup_tracing();
  let store = RecordingPublisher::new(SeasonalTheme::default());
  let mut controller = PreviewController::<SeasonalTheme>::new("theme");
  controller.enter_preview(christmas(), "/admin/themes");

  assert!(controller.publish_preview(&store).await);
  // Publishing alone leaves the draft for the caller to discard.
  assert!(controller.is_active());

  let revision = controller.revision().unwrap();
  let return_url = controller.complete_publish(revision);
  assert_eq!(return_url.as_deref(), Some("/admin/themes"));
  assert!(!controller.is_active());

  let persisted = store.persisted();
  assert_eq!(persisted, christmas());
  assert_eq!(controller.effective(&persisted), &christmas());
  assert_eq!(store.write_count(), 1);
}

#[tokio::test]
async fn test_failed_publish_keeps_draft_for_retry() {
  setup_tracing();
  let failing = FailingPublisher::default();
  let mut controller = PreviewController::<SeasonalTheme>::new("theme");
  controller.enter_preview(christmas(), "/admin/themes");
  let revision = controller.revision();

  assert!(!controller.publish_preview(&failing).await);
  assert!(controller.is_active());
  assert_eq!(controller.draft(), Some(&christmas()));
  assert_eq!(controller.revision(), revision);

  // Retry against a working store succeeds with the same draft.
  let store = RecordingPublisher::new(SeasonalTheme::default());
  assert!(controller.publish_preview(&store).await);
  assert_eq!(store.persisted(), christmas());
  assert_eq!(failing.attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_try_publish_reports_error_kinds() {
  let controller = PreviewController::<SiteContent>::new("content");
  let store = RecordingPublisher::new(SiteContent::default());
  let err = controller.try_publish(&store).await.unwrap_err();
  assert!(matches!(err, StorefrontError::NoActivePreview { kind: "content" }));
  assert!(!controller.publish_preview(&store).await);
  assert_eq!(store.write_count(), 0);

  let mut controller = controller;
  controller.enter_preview(SiteContent::default(), "/admin/content");
  let err = controller.try_publish(&FailingPublisher::default()).await.unwrap_err();
  assert!(matches!(err, StorefrontError::Publish { kind: "content", .. }));
  assert!(err.to_string().contains("settings endpoint unavailable"));
}

#[tokio::test]
async fn test_complete_publish_keeps_newer_draft() {
  let store = RecordingPublisher::new(SeasonalTheme::default());
  let mut controller = PreviewController::<SeasonalTheme>::new("theme");
  controller.enter_preview(SeasonalTheme::default(), "/admin/themes");

  // The write runs against a snapshot while the live controller moves on.
  let snapshot = controller.clone();
  let published = snapshot.try_publish(&store).await.unwrap();
  controller.enter_preview(christmas(), "/admin/themes");

  assert_eq!(controller.complete_publish(published), None);
  assert_eq!(controller.draft(), Some(&christmas()));
}

#[test]
fn test_state_snapshot_serializes_camel_case() {
  let mut controller = PreviewController::<SeasonalTheme>::new("theme");
  let inactive = serde_json::to_value(controller.state()).unwrap();
  assert_eq!(inactive["isActive"], false);
  assert!(inactive["draftPayload"].is_null());

  controller.enter_preview(christmas(), "/admin/themes");
  let active = serde_json::to_value(controller.state()).unwrap();
  assert_eq!(active["isActive"], true);
  assert_eq!(active["draftPayload"]["primaryColor"], "#b91c1c");
  assert_eq!(active["returnUrl"], "/admin/themes");
}
