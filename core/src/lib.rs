// core/src/lib.rs

//! Storefront: session-scoped state for a small retail web shop.
//!
//! This crate holds the parts of the shop that carry behaviour rather than
//! plain data plumbing:
//!  - A per-session cart with sale-price aware totals.
//!  - WhatsApp checkout: the cart becomes a pre-filled chat message link.
//!  - A generic preview/publish controller for admin drafts (seasonal theme,
//!    site content) that renders a draft in place of the persisted value.
//!  - An in-memory session registry tying the above to one visitor.
//!
//! HTTP and storage live in the application crate.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod content;
pub mod error;
pub mod icon;
pub mod money;
pub mod preview;
pub mod session;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartItem};
pub use crate::catalog::{Category, Product, Promotion, Review};
pub use crate::checkout::{clean_phone_number, CheckoutLink, CheckoutSettings};
pub use crate::content::{ContactInfo, SeasonalTheme, SiteContent};
pub use crate::error::{StorefrontError, StorefrontResult};
pub use crate::icon::Icon;
pub use crate::preview::{PreviewController, PreviewSession, PreviewState, Publisher};
pub use crate::session::{PreviewBanner, Session, SessionHandle, SessionStore};
