// tests/session_tests.rs
mod common;

use common::*;
use std::time::Duration;
use storefront::{PreviewBanner, SeasonalTheme, SessionStore, SiteContent};
use uuid::Uuid;

#[test]
fn test_sessions_are_isolated() {
  setup_tracing();
  let store = SessionStore::new();
  let (id_a, a) = store.create();
  let (id_b, b) = store.create();
  assert_ne!(id_a, id_b);
  assert_eq!(store.len(), 2);

  a.write().cart.add_to_cart(product("Rosa", 1200));
  a.write().theme_preview.enter_preview(SeasonalTheme::default(), "/admin");

  assert_eq!(a.read().cart.get_item_count(), 1);
  assert!(b.read().cart.is_empty());
  assert!(!b.read().theme_preview.is_active());
}

#[test]
fn test_get_returns_same_session() {
  let store = SessionStore::new();
  let (id, handle) = store.create();
  handle.write().cart.add_to_cart(product("Tulipán", 900));

  let again = store.get(id).expect("session exists");
  assert_eq!(again.read().cart.get_total(), 900);
  assert!(store.get(Uuid::new_v4()).is_none());
}

#[test]
fn test_theme_banner_takes_precedence_over_content() {
  let store = SessionStore::new();
  let (_, handle) = store.create();
  assert_eq!(handle.read().active_banner(), None);

  handle.write().content_preview.enter_preview(SiteContent::default(), "/admin/content");
  assert_eq!(handle.read().active_banner(), Some(PreviewBanner::Content));

  handle.write().theme_preview.enter_preview(SeasonalTheme::default(), "/admin/themes");
  assert_eq!(handle.read().active_banner(), Some(PreviewBanner::Theme));
  // Both drafts coexist.
  assert!(handle.read().content_preview.is_active());

  handle.write().theme_preview.cancel_preview();
  assert_eq!(handle.read().active_banner(), Some(PreviewBanner::Content));
}

#[test]
fn test_remove_session() {
  let store = SessionStore::new();
  let (id, _) = store.create();
  assert!(store.remove(id));
  assert!(!store.remove(id));
  assert!(store.is_empty());
}

#[test]
fn test_purge_idle_drops_only_stale_sessions() {
  let store = SessionStore::new();
  let (_, _stale) = store.create();
  std::thread::sleep(Duration::from_millis(120));
  let (fresh_id, _fresh) = store.create();

  let removed = store.purge_idle(Duration::from_millis(60));
  assert_eq!(removed, 1);
  assert_eq!(store.len(), 1);
  assert!(store.get(fresh_id).is_some());
}
