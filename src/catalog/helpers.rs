//! Catalog Helpers
//!
//! Small pure functions used when building and listing a catalog.

use super::models::{CatalogItem, Fruit};
use crate::error::{MarketError, Result};
use serde_json::Value;

/// Decodes a JSON array of catalog items.
///
/// Prices may be given as strings (`"4.50"`) or numbers.
pub fn decode_items(value: Value) -> Result<Vec<CatalogItem>> {
    serde_json::from_value(value).map_err(|e| MarketError::InvalidCatalog(e.to_string()))
}

/// Returns the names of `fruits` in ascending lexical order.
pub fn sorted_names<I>(fruits: I) -> Vec<String>
where
    I: IntoIterator<Item = Fruit>,
{
    let mut names: Vec<String> = fruits.into_iter().map(|f| f.name().to_string()).collect();
    names.sort();
    names
}
