//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::CartItem;
use crate::catalog::models::Fruit;
use std::collections::HashMap;
use uuid::Uuid;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Adds `quantity` of `fruit` to `lines`, aggregating with an existing entry.
///
/// Quantities saturate at `u32::MAX`. Returns the new quantity held.
pub fn add_to_lines(lines: &mut HashMap<Fruit, u32>, fruit: Fruit, quantity: u32) -> u32 {
    let held = lines.entry(fruit).or_insert(0);
    *held = held.saturating_add(quantity);
    *held
}

/// Removes up to `quantity` of `fruit` from `lines`.
///
/// The removal is clamped to what is held, so the stored quantity never
/// drops below zero. A fruit that was never added is left alone.
/// Returns the quantity actually removed.
pub fn remove_from_lines(lines: &mut HashMap<Fruit, u32>, fruit: Fruit, quantity: u32) -> u32 {
    match lines.get_mut(&fruit) {
        Some(held) => {
            let removed = quantity.min(*held);
            *held -= removed;
            removed
        }
        None => 0,
    }
}

/// Collects the non-empty lines of a cart, ordered by fruit name.
pub fn collect_items(lines: &HashMap<Fruit, u32>) -> Vec<CartItem> {
    let mut items: Vec<CartItem> = lines
        .iter()
        .filter(|(_, quantity)| **quantity > 0)
        .map(|(fruit, quantity)| CartItem {
            fruit: *fruit,
            quantity: *quantity,
        })
        .collect();
    items.sort_by_key(|item| item.fruit.name());
    items
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Apple, 1x Banana"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.fruit))
        .collect::<Vec<_>>()
        .join(", ")
}
