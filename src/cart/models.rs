//! Shopping Cart Domain Models
//!
//! This module contains the views of a cart handed back to callers.

use crate::catalog::models::Fruit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Represents one fruit line held in a cart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Fruit selected by the shopper
    pub fruit: Fruit,

    /// Units selected
    pub quantity: u32,
}

/// Point-in-time view of a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Cart identifier
    pub cart_id: String,

    /// Lines with a non-zero quantity, ordered by fruit name
    pub items: Vec<CartItem>,
}

/// Result of checking out a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Cart identifier
    pub cart_id: String,

    /// Lines that were paid for
    pub items: Vec<CartItem>,

    /// Amount charged, discounts included
    pub total: Decimal,
}
