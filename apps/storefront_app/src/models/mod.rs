// apps/storefront_app/src/models/mod.rs

//! Database rows, in the snake_case shape the tables use. Each row converts
//! into the camelCase presentation type from the `storefront` crate.

// Declare child modules for each model
pub mod category;
pub mod product;
pub mod promotion;
pub mod review;
pub mod settings;

// Re-export the row structs for convenient access
pub use category::CategoryRow;
pub use product::ProductRow;
pub use promotion::PromotionRow;
pub use review::ReviewRow;
pub use settings::{SettingsKey, SettingsRow};
