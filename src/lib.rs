//! Fruit Market Library
//!
//! This library provides a fruit catalog with per-fruit price and stock,
//! per-session shopping carts, and the bulk discount pricing rule that ties
//! them together.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod pricing;

// Infrastructure
pub mod config;
pub mod error;

pub use cart::{Cart, CartItem, CartSnapshot, Receipt};
pub use catalog::{Catalog, CatalogItem, Fruit};
pub use config::BulkDiscount;
pub use error::{MarketError, Result};
pub use pricing::price_for;
