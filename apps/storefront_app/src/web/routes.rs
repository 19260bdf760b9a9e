// apps/storefront_app/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{cart_handlers, catalog_handlers, content_handlers, preview_handlers, session_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the integration tests) to mount every route.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Visitor sessions
      .service(
        web::scope("/sessions")
          .route("", web::post().to(session_handlers::create_session_handler))
          .route("", web::delete().to(session_handlers::end_session_handler)),
      )
      // Catalogue
      .service(
        web::scope("/products")
          .route("", web::get().to(catalog_handlers::list_products_handler))
          .route("/{product_id}", web::get().to(catalog_handlers::get_product_handler)),
      )
      .route("/categories", web::get().to(catalog_handlers::list_categories_handler))
      .route("/promotions", web::get().to(catalog_handlers::list_promotions_handler))
      .route("/reviews", web::get().to(catalog_handlers::list_reviews_handler))
      // Effective site settings (draft for a previewing session)
      .route("/content", web::get().to(content_handlers::get_content_handler))
      .route("/theme", web::get().to(content_handlers::get_theme_handler))
      // Cart Routes
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::get_cart_handler))
          .route("", web::delete().to(cart_handlers::clear_cart_handler))
          .route("/items", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/items/{product_id}", web::put().to(cart_handlers::update_quantity_handler))
          .route("/items/{product_id}", web::delete().to(cart_handlers::remove_from_cart_handler))
          .route("/close", web::post().to(cart_handlers::close_cart_handler))
          .route("/checkout", web::post().to(cart_handlers::checkout_handler)),
      )
      // Admin preview / publish
      .service(
        web::scope("/admin/preview")
          .route("", web::get().to(preview_handlers::preview_status_handler))
          .route("/{kind}", web::post().to(preview_handlers::enter_preview_handler))
          .route("/{kind}", web::delete().to(preview_handlers::cancel_preview_handler))
          .route("/{kind}/publish", web::post().to(preview_handlers::publish_preview_handler)),
      ),
  );
}
