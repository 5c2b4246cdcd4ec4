//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartItem, snapshots, receipts)
//! - Business logic helpers (line arithmetic, formatting)
//! - The per-session Cart with its pricing and checkout

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{CartItem, CartSnapshot, Receipt};
pub use state::Cart;
