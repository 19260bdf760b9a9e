// core/src/cart.rs

//! The per-session shopping cart: a flat list of products and quantities.
//! There is no order lifecycle here; "checking out" only produces a
//! pre-filled WhatsApp message (see `crate::checkout`).

use crate::catalog::Product;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  pub product: Product,
  pub quantity: u32,
}

impl CartItem {
  /// Saturates instead of overflowing on absurd quantities.
  pub fn subtotal_cents(&self) -> i64 {
    self.product.unit_price_cents().saturating_mul(i64::from(self.quantity))
  }
}

/// Invariant: at most one item per product id, and every quantity is >= 1.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
  items: Vec<CartItem>,
  is_open: bool,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn is_open(&self) -> bool {
    self.is_open
  }

  pub fn open(&mut self) {
    self.is_open = true;
  }

  pub fn close(&mut self) {
    self.is_open = false;
  }

  pub fn quantity_of(&self, product_id: Uuid) -> Option<u32> {
    self.position(product_id).map(|idx| self.items[idx].quantity)
  }

  /// Adds one unit of `product`, merging with an existing line for the same id.
  /// Opens the cart so the shopper sees what was added.
  pub fn add_to_cart(&mut self, product: Product) {
    match self.position(product.id) {
      Some(idx) => {
        let item = &mut self.items[idx];
        item.quantity = item.quantity.saturating_add(1);
        debug!(product_id = %product.id, quantity = item.quantity, "Cart line incremented.");
      }
      None => {
        debug!(product_id = %product.id, "Cart line added.");
        self.items.push(CartItem { product, quantity: 1 });
      }
    }
    self.is_open = true;
  }

  pub fn remove_from_cart(&mut self, product_id: Uuid) {
    self.items.retain(|item| item.product.id != product_id);
  }

  /// Sets the quantity of an existing line. Zero or negative removes it;
  /// an unknown product id is ignored.
  pub fn update_quantity(&mut self, product_id: Uuid, quantity: i64) {
    if quantity <= 0 {
      self.remove_from_cart(product_id);
      return;
    }
    if let Some(idx) = self.position(product_id) {
      self.items[idx].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    }
  }

  pub fn clear_cart(&mut self) {
    self.items.clear();
  }

  /// Sum of `unit price * quantity` over all lines, in cents.
  pub fn get_total(&self) -> i64 {
    self
      .items
      .iter()
      .map(CartItem::subtotal_cents)
      .fold(0_i64, i64::saturating_add)
  }

  pub fn get_item_count(&self) -> u64 {
    self
      .items
      .iter()
      .map(|item| u64::from(item.quantity))
      .fold(0_u64, u64::saturating_add)
  }

  fn position(&self, product_id: Uuid) -> Option<usize> {
    self.items.iter().position(|item| item.product.id == product_id)
  }
}
