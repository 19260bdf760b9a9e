// apps/storefront_app/src/web/handlers/mod.rs

// Declare handler modules
pub mod cart_handlers;
pub mod catalog_handlers;
pub mod content_handlers;
pub mod preview_handlers;
pub mod session_handlers;
