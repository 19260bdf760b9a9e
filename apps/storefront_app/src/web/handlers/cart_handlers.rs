// apps/storefront_app/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use storefront::money::format_price;
use storefront::{Cart, CartItem};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::store;
use crate::web::extractors::CurrentSession;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequestPayload {
  pub product_id: Uuid,
}

#[derive(Deserialize, Debug)]
pub struct UpdateQuantityRequestPayload {
  pub quantity: i64,
}

// --- Response DTO ---
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
  pub items: Vec<CartItem>,
  pub item_count: u64,
  pub total_cents: i64,
  pub total_display: String,
  pub is_open: bool,
}

impl CartView {
  pub fn new(cart: &Cart, currency_symbol: &str) -> Self {
    let total_cents = cart.get_total();
    Self {
      items: cart.items().to_vec(),
      item_count: cart.get_item_count(),
      total_cents,
      total_display: format_price(currency_symbol, total_cents),
      is_open: cart.is_open(),
    }
  }
}

fn cart_response(app_state: &AppState, session: &CurrentSession) -> HttpResponse {
  let view = CartView::new(&session.handle.read().cart, &app_state.config.currency_symbol);
  HttpResponse::Ok().json(json!({ "cart": view }))
}

// --- Handler Implementations ---

#[instrument(name = "handler::get_cart", skip_all, fields(session_id = %session.id))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  Ok(cart_response(&app_state, &session))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload, session),
    fields(session_id = %session.id, product_id = %req_payload.product_id)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  let product_id = req_payload.product_id;

  // The product is looked up server-side so clients cannot choose their own price.
  let product = match app_state.store.get_product(product_id).await? {
    Some(product) if product.is_active => product,
    _ => {
      warn!("Add to cart: product {} not found or inactive.", product_id);
      return Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)));
    }
  };

  session.handle.write().cart.add_to_cart(product);
  info!("Product added to cart.");
  Ok(cart_response(&app_state, &session))
}

#[instrument(
    name = "handler::update_cart_quantity",
    skip(app_state, path, req_payload, session),
    fields(session_id = %session.id, product_id = %path.as_ref(), quantity = req_payload.quantity)
)]
pub async fn update_quantity_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<UpdateQuantityRequestPayload>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  session
    .handle
    .write()
    .cart
    .update_quantity(product_id, req_payload.quantity);
  Ok(cart_response(&app_state, &session))
}

#[instrument(
    name = "handler::remove_from_cart",
    skip(app_state, path, session),
    fields(session_id = %session.id, product_id = %path.as_ref())
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  session.handle.write().cart.remove_from_cart(path.into_inner());
  Ok(cart_response(&app_state, &session))
}

#[instrument(name = "handler::clear_cart", skip_all, fields(session_id = %session.id))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  session.handle.write().cart.clear_cart();
  Ok(cart_response(&app_state, &session))
}

#[instrument(name = "handler::close_cart", skip_all, fields(session_id = %session.id))]
pub async fn close_cart_handler(
  app_state: web::Data<AppState>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  session.handle.write().cart.close();
  Ok(cart_response(&app_state, &session))
}

/// Builds the WhatsApp link and empties the cart. An empty cart answers
/// `sent: false` and changes nothing.
#[instrument(name = "handler::checkout", skip_all, fields(session_id = %session.id))]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  session: CurrentSession,
) -> Result<HttpResponse, AppError> {
  // Load before locking; the guard must not live across an await.
  // Without site content the default number is used, checkout still goes out.
  let persisted_content = match store::load_content(app_state.store.as_ref()).await {
    Ok(content) => Some(content),
    Err(e) => {
      warn!(error = %e, "Could not load site content for checkout, using the default number.");
      None
    }
  };

  let link = {
    let mut guard = session.handle.write();
    let current = &mut *guard;
    let content = match &persisted_content {
      Some(persisted) => Some(current.content_preview.effective(persisted)),
      None => current.content_preview.draft(),
    };
    current.cart.send_to_whatsapp(&app_state.checkout, content)
  };

  match link {
    Some(link) => {
      info!(phone_number = %link.phone_number, "Checkout link issued.");
      Ok(HttpResponse::Ok().json(json!({
        "sent": true,
        "checkoutUrl": link.url,
        "phoneNumber": link.phone_number,
        "summary": link.summary,
      })))
    }
    None => {
      info!("Checkout requested with an empty cart, nothing to send.");
      Ok(HttpResponse::Ok().json(json!({ "sent": false, "checkoutUrl": null })))
    }
  }
}
