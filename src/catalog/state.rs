//! Catalog State Management
//!
//! The catalog is the authoritative source of price and stock per fruit.

use super::{
    helpers::{decode_items, sorted_names},
    models::{CatalogItem, Fruit, StockEntry},
};
use crate::error::{MarketError, Result};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Price and stock reference data keyed by fruit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<Fruit, StockEntry>,
}

impl Catalog {
    /// Builds a catalog from `items`.
    ///
    /// A fruit listed more than once keeps the values of its last item.
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = CatalogItem>,
    {
        let mut entries = HashMap::new();
        for item in items {
            if entries.insert(item.fruit, StockEntry::from(&item)).is_some() {
                tracing::debug!(fruit = %item.fruit, "catalog item overrides an earlier entry");
            }
        }

        tracing::debug!(fruits = entries.len(), "catalog stocked");
        Self { entries }
    }

    /// Builds a catalog from a JSON array of catalog items
    pub fn from_json(value: Value) -> Result<Self> {
        let items = decode_items(value)?;
        Ok(Self::with_items(items))
    }

    pub fn get_price_of(&self, fruit: Fruit) -> Result<Decimal> {
        self.entry(fruit).map(|e| e.price_per_unit)
    }

    /// Overwrites the price of a fruit already in the catalog
    pub fn set_price_of(&mut self, fruit: Fruit, price: Decimal) -> Result<()> {
        let entry = self.entry_mut(fruit)?;
        entry.price_per_unit = price;
        tracing::debug!(%fruit, %price, "price updated");
        Ok(())
    }

    /// Returns the units in stock.
    ///
    /// A fruit with zero stock is reported as unavailable, exactly like a
    /// fruit the catalog never carried.
    pub fn get_quantity_of(&self, fruit: Fruit) -> Result<u32> {
        match self.entry(fruit)?.quantity_in_stock {
            0 => {
                tracing::debug!(%fruit, "fruit out of stock");
                Err(MarketError::FruitUnavailable(fruit))
            }
            quantity => Ok(quantity),
        }
    }

    /// Overwrites the stock of a fruit already in the catalog
    pub fn set_quantity_of(&mut self, fruit: Fruit, quantity: u32) -> Result<()> {
        let entry = self.entry_mut(fruit)?;
        entry.quantity_in_stock = quantity;
        tracing::debug!(%fruit, quantity, "stock updated");
        Ok(())
    }

    /// Names of every fruit in the catalog, sorted alphabetically.
    ///
    /// Zero-stock fruits are still listed.
    pub fn get_available_fruits(&self) -> Vec<String> {
        sorted_names(self.entries.keys().copied())
    }

    /// Unit price of every fruit in the catalog
    pub fn price_list(&self) -> BTreeMap<Fruit, Decimal> {
        self.entries
            .iter()
            .map(|(fruit, entry)| (*fruit, entry.price_per_unit))
            .collect()
    }

    pub fn contains(&self, fruit: Fruit) -> bool {
        self.entries.contains_key(&fruit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, fruit: Fruit) -> Result<&StockEntry> {
        self.entries.get(&fruit).ok_or_else(|| {
            tracing::warn!(%fruit, "fruit not carried by catalog");
            MarketError::FruitUnavailable(fruit)
        })
    }

    fn entry_mut(&mut self, fruit: Fruit) -> Result<&mut StockEntry> {
        self.entries.get_mut(&fruit).ok_or_else(|| {
            tracing::warn!(%fruit, "fruit not carried by catalog");
            MarketError::FruitUnavailable(fruit)
        })
    }
}
