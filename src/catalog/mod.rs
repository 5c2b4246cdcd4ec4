//! Fruit Catalog Domain Module
//!
//! This module contains the catalog side of the market, including:
//! - Domain models (Fruit, CatalogItem, StockEntry)
//! - Helpers for decoding and listing catalog data
//! - The Catalog container with its price and stock accessors

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{CatalogItem, Fruit};
pub use state::Catalog;
