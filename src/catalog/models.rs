//! Catalog Domain Models
//!
//! This module contains the fruit identities and the records used to
//! stock a catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// =============================================================================
// Fruit
// =============================================================================

/// The closed set of fruit kinds sold by the market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Fruit {
    Apple,
    Banana,
    Lemon,
    Orange,
    Pear,
}

impl Fruit {
    /// Every fruit kind, in declaration order
    pub const ALL: [Fruit; 5] = [
        Fruit::Apple,
        Fruit::Banana,
        Fruit::Lemon,
        Fruit::Orange,
        Fruit::Pear,
    ];

    /// Canonical display name, also used for alphabetical listings
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Apple => "Apple",
            Self::Banana => "Banana",
            Self::Lemon => "Lemon",
            Self::Orange => "Orange",
            Self::Pear => "Pear",
        }
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Fruit {
    type Err = String;

    /// Parses a fruit from its name, ignoring case
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fruit| fruit.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("Unknown fruit: {}", value))
    }
}

// =============================================================================
// Catalog Records
// =============================================================================

/// Input record used to stock a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Fruit being stocked
    pub fruit: Fruit,

    /// Units available
    pub quantity: u32,

    /// Price of a single unit
    pub price_per_unit: Decimal,
}

impl CatalogItem {
    pub fn new(fruit: Fruit, quantity: u32, price_per_unit: Decimal) -> Self {
        Self {
            fruit,
            quantity,
            price_per_unit,
        }
    }
}

/// Price and stock held by the catalog for one fruit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockEntry {
    pub price_per_unit: Decimal,
    pub quantity_in_stock: u32,
}

impl From<&CatalogItem> for StockEntry {
    fn from(item: &CatalogItem) -> Self {
        Self {
            price_per_unit: item.price_per_unit,
            quantity_in_stock: item.quantity,
        }
    }
}
