// apps/storefront_app/src/lib.rs

//! HTTP service for the storefront: catalogue, session cart with WhatsApp
//! checkout, and admin preview/publish of the theme and site content.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
