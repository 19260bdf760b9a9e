// apps/storefront_app/src/web/mod.rs

// Declare child modules
pub mod extractors;
pub mod handlers;
pub mod routes;

// Re-export the routing configuration so main.rs and tests can mount it.
pub use routes::configure_app_routes;
