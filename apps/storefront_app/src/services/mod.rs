// apps/storefront_app/src/services/mod.rs

pub mod publisher;

pub use publisher::StorePublisher;
