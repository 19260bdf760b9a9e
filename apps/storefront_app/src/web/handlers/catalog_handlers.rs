// apps/storefront_app/src/web/handlers/catalog_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use storefront::Promotion;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::ProductFilter;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ProductFilter>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.store.list_products(&query_params).await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(json!({ "products": products })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.store.get_product(product_id).await? {
    Some(product) if product.is_active => Ok(HttpResponse::Ok().json(json!({ "product": product }))),
    _ => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = app_state.store.list_categories().await?;
  Ok(HttpResponse::Ok().json(json!({ "categories": categories })))
}

/// Only promotions that are active and inside their date window.
#[instrument(name = "handler::list_promotions", skip(app_state))]
pub async fn list_promotions_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let now = Utc::now();
  let promotions: Vec<Promotion> = app_state
    .store
    .list_promotions()
    .await?
    .into_iter()
    .filter(|promo| promo.is_current(now))
    .collect();
  Ok(HttpResponse::Ok().json(json!({ "promotions": promotions })))
}

#[instrument(name = "handler::list_reviews", skip(app_state))]
pub async fn list_reviews_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let reviews = app_state.store.list_reviews().await?;
  Ok(HttpResponse::Ok().json(json!({ "reviews": reviews })))
}
