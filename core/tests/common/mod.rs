// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use storefront::{Product, Publisher};
use tracing::Level;
use uuid::Uuid;

// --- Product fixtures ---
pub fn product(name: &str, price_cents: i64) -> Product {
  Product::new(Uuid::new_v4(), name, price_cents)
}

pub fn sale_product(name: &str, price_cents: i64, sale_price_cents: i64) -> Product {
  product(name, price_cents).with_sale_price(sale_price_cents)
}

// --- Publishers ---

/// Acts as the persisted settings store: remembers the last value written.
pub struct RecordingPublisher<T> {
  pub persisted: Mutex<T>,
  pub writes: AtomicUsize,
}

impl<T> RecordingPublisher<T> {
  pub fn new(initial: T) -> Self {
    Self {
      persisted: Mutex::new(initial),
      writes: AtomicUsize::new(0),
    }
  }

  pub fn write_count(&self) -> usize {
    self.writes.load(Ordering::SeqCst)
  }
}

impl<T: Clone> RecordingPublisher<T> {
  pub fn persisted(&self) -> T {
    self.persisted.lock().clone()
  }
}

#[async_trait]
impl<T: Clone + Send + Sync> Publisher<T> for RecordingPublisher<T> {
  async fn publish(&self, value: &T) -> anyhow::Result<()> {
    *self.persisted.lock() = value.clone();
    self.writes.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }
}

/// Always fails, counting attempts.
#[derive(Default)]
pub struct FailingPublisher {
  pub attempts: AtomicUsize,
}

#[async_trait]
impl<T: Sync> Publisher<T> for FailingPublisher {
  async fn publish(&self, _value: &T) -> anyhow::Result<()> {
    self.attempts.fetch_add(1, Ordering::SeqCst);
    anyhow::bail!("settings endpoint unavailable")
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
