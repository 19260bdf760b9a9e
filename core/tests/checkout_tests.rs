// tests/checkout_tests.rs
mod common;

use common::*;
use storefront::{clean_phone_number, Cart, CheckoutSettings, SiteContent};

fn content_with(whatsapp: Option<&str>, phone: Option<&str>) -> SiteContent {
  let mut content = SiteContent::default();
  content.contact.whatsapp = whatsapp.map(str::to_string);
  content.contact.phone = phone.map(str::to_string);
  content
}

#[test]
fn test_clean_phone_number_strips_formatting() {
  assert_eq!(clean_phone_number("+51 932-371-532"), "51932371532");
  assert_eq!(clean_phone_number("(01) 555.1234"), "015551234");
  assert_eq!(clean_phone_number("n/a"), "");
}

#[test]
fn test_resolve_number_prefers_content_then_default() {
  let settings = CheckoutSettings::default();

  assert_eq!(settings.resolve_number(None), "51932371532");
  assert_eq!(
    settings.resolve_number(Some(&content_with(Some("+51 999 111 222"), Some("01 444 5555")))),
    "51999111222"
  );
  assert_eq!(
    settings.resolve_number(Some(&content_with(None, Some("+51 (1) 444-5555")))),
    "5114445555"
  );
}

#[test]
fn test_malformed_contact_falls_back_to_default() {
  let settings = CheckoutSettings {
    default_number: "+51 900 000 000".to_string(),
    ..CheckoutSettings::default()
  };
  let content = content_with(Some("pronto"), Some("---"));
  assert_eq!(settings.resolve_number(Some(&content)), "51900000000");
}

#[test]
fn test_empty_cart_sends_nothing() {
  setup_tracing();
  let settings = CheckoutSettings::default();
  let mut cart = Cart::new();
  cart.open();

  assert!(cart.send_to_whatsapp(&settings, None).is_none());
  // The cart is untouched, including the open flag.
  assert!(cart.is_open());
}

#[test]
fn test_order_summary_lists_lines_and_total() {
  let settings = CheckoutSettings::default();
  let mut cart = Cart::new();
  let osito = sale_product("Osito", 1000, 800);
  cart.add_to_cart(osito.clone());
  cart.add_to_cart(osito);
  cart.add_to_cart(product("Globo", 500));

  let summary = settings.order_summary(&cart);
  let expected = "Hola! Quiero realizar el siguiente pedido:\n\
                  \n\
                  1. Osito\n   Cantidad: 2\n   Precio unitario: S/ 8.00\n   Subtotal: S/ 16.00\n\
                  \n\
                  2. Globo\n   Cantidad: 1\n   Precio unitario: S/ 5.00\n   Subtotal: S/ 5.00\n\
                  \n\
                  Total: S/ 21.00";
  assert_eq!(summary, expected);
}

#[test]
fn test_send_to_whatsapp_builds_link_and_clears_cart() {
  setup_tracing();
  let settings = CheckoutSettings::default();
  let content = content_with(Some("+51 932-371-532"), None);
  let mut cart = Cart::new();
  cart.add_to_cart(product("Caja de regalo", 3550));

  let link = cart.send_to_whatsapp(&settings, Some(&content)).expect("link for non-empty cart");

  assert_eq!(link.phone_number, "51932371532");
  assert!(link.url.starts_with("https://wa.me/51932371532?text="));
  assert!(link.url.contains("Caja%20de%20regalo"));
  assert!(link.url.contains("Total%3A%20S%2F%2035.50"));
  assert!(!link.url.contains(' '));
  assert!(!link.url.contains('\n'));
  assert!(link.summary.ends_with("Total: S/ 35.50"));

  assert!(cart.is_empty());
  assert!(!cart.is_open());
}

#[test]
fn test_checkout_link_respects_base_url_and_symbol() {
  let settings = CheckoutSettings {
    base_url: "https://api.whatsapp.example/".to_string(),
    currency_symbol: "$".to_string(),
    ..CheckoutSettings::default()
  };
  let mut cart = Cart::new();
  cart.add_to_cart(product("Flores", 1000));

  let link = settings.checkout_link(&cart, None).unwrap();
  assert!(link.url.starts_with("https://api.whatsapp.example/51932371532?text="));
  assert!(link.summary.contains("Total: $ 10.00"));
  // Building the link alone does not clear the cart.
  assert_eq!(cart.get_item_count(), 1);
}
