// core/src/checkout.rs

//! WhatsApp checkout: turns a cart into a pre-filled chat message.
//!
//! Nothing is delivered from here. The resulting link is opened by the
//! shopper's browser in a new tab and a human presses "send".

use crate::cart::Cart;
use crate::content::SiteContent;
use crate::money::format_price;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{info, warn};

pub const DEFAULT_WHATSAPP_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "51932371532";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "S/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
  pub base_url: String,
  /// Used when the site content carries no usable number.
  pub default_number: String,
  pub currency_symbol: String,
  pub greeting: String,
  pub quantity_label: String,
  pub unit_price_label: String,
  pub subtotal_label: String,
  pub total_label: String,
}

impl Default for CheckoutSettings {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_WHATSAPP_BASE_URL.to_string(),
      default_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
      currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
      greeting: "Hola! Quiero realizar el siguiente pedido:".to_string(),
      quantity_label: "Cantidad".to_string(),
      unit_price_label: "Precio unitario".to_string(),
      subtotal_label: "Subtotal".to_string(),
      total_label: "Total".to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLink {
  pub url: String,
  pub phone_number: String,
  pub summary: String,
}

/// Strips every non-digit character: `"+51 932-371-532"` -> `"51932371532"`.
pub fn clean_phone_number(raw: &str) -> String {
  raw.chars().filter(char::is_ascii_digit).collect()
}

impl CheckoutSettings {
  /// Picks the destination number: the site content's WhatsApp number, then its
  /// phone number, then the configured default. Candidates without any digits
  /// are skipped.
  pub fn resolve_number(&self, content: Option<&SiteContent>) -> String {
    let from_content = content
      .into_iter()
      .flat_map(|c| c.contact_numbers())
      .map(clean_phone_number)
      .find(|digits| !digits.is_empty());

    match from_content {
      Some(digits) => digits,
      None => {
        if content.is_some() {
          warn!("Site content has no usable contact number, using the default WhatsApp number.");
        }
        clean_phone_number(&self.default_number)
      }
    }
  }

  /// Multi-line order text: one block per line item, then the grand total.
  pub fn order_summary(&self, cart: &Cart) -> String {
    let symbol = self.currency_symbol.as_str();
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(text, "{}", self.greeting);
    for (idx, item) in cart.items().iter().enumerate() {
      let _ = writeln!(text);
      let _ = writeln!(text, "{}. {}", idx + 1, item.product.name);
      let _ = writeln!(text, "   {}: {}", self.quantity_label, item.quantity);
      let _ = writeln!(
        text,
        "   {}: {}",
        self.unit_price_label,
        format_price(symbol, item.product.unit_price_cents())
      );
      let _ = writeln!(text, "   {}: {}", self.subtotal_label, format_price(symbol, item.subtotal_cents()));
    }
    let _ = writeln!(text);
    let _ = write!(text, "{}: {}", self.total_label, format_price(symbol, cart.get_total()));
    text
  }

  /// Builds the `wa.me` link for the cart, or `None` when the cart is empty.
  pub fn checkout_link(&self, cart: &Cart, content: Option<&SiteContent>) -> Option<CheckoutLink> {
    if cart.is_empty() {
      return None;
    }
    let phone_number = self.resolve_number(content);
    let summary = self.order_summary(cart);
    let url = format!(
      "{}/{}?text={}",
      self.base_url.trim_end_matches('/'),
      phone_number,
      urlencoding::encode(&summary)
    );
    Some(CheckoutLink {
      url,
      phone_number,
      summary,
    })
  }
}

impl Cart {
  /// Produces the checkout link and empties the cart. An empty cart yields
  /// `None` and is left exactly as it was.
  pub fn send_to_whatsapp(&mut self, settings: &CheckoutSettings, content: Option<&SiteContent>) -> Option<CheckoutLink> {
    let link = settings.checkout_link(self, content)?;
    info!(
      items = self.items().len(),
      total_cents = self.get_total(),
      phone_number = %link.phone_number,
      "WhatsApp checkout link prepared, clearing cart."
    );
    self.clear_cart();
    self.close();
    Some(link)
  }
}
