//! Shopping Cart State Management
//!
//! A `Cart` is one shopping session. Each instance owns its selections;
//! callers that need the session in several places pass it by reference.

use super::{
    helpers::{add_to_lines, collect_items, format_item_summary, get_or_create_cart_id, remove_from_lines},
    models::{CartItem, CartSnapshot, Receipt},
};
use crate::{
    catalog::{models::Fruit, state::Catalog},
    config::BulkDiscount,
    error::{MarketError, Result},
};
use rust_decimal::Decimal;
use std::collections::HashMap;

// =============================================================================
// Cart
// =============================================================================

/// Per-session accumulation of selected quantities keyed by fruit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    /// Session identifier
    cart_id: String,

    /// Selected quantity per fruit. Entries may stay at zero after removal.
    lines: HashMap<Fruit, u32>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates an empty cart with a freshly generated identifier
    pub fn new() -> Self {
        Self::with_id(None::<String>)
    }

    /// Creates an empty cart, keeping `cart_id` when it is non-empty
    pub fn with_id(cart_id: impl Into<Option<String>>) -> Self {
        Self {
            cart_id: get_or_create_cart_id(cart_id.into()),
            lines: HashMap::new(),
        }
    }

    pub fn cart_id(&self) -> &str {
        &self.cart_id
    }

    /// Adds `quantity` of `fruit`. Stock is not checked here.
    pub fn add(&mut self, fruit: Fruit, quantity: u32) {
        let held = add_to_lines(&mut self.lines, fruit, quantity);
        tracing::debug!(cart_id = %self.cart_id, %fruit, quantity, held, "added to cart");
    }

    /// Adds every `(fruit, quantity)` pair, aggregating repeated fruits
    pub fn add_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (Fruit, u32)>,
    {
        for (fruit, quantity) in items {
            self.add(fruit, quantity);
        }
    }

    /// Removes up to `quantity` of `fruit` and returns how much was removed.
    ///
    /// Asking for more than is held empties the line instead of failing.
    /// Removing a fruit that was never added does nothing and returns 0.
    pub fn remove(&mut self, fruit: Fruit, quantity: u32) -> u32 {
        let removed = remove_from_lines(&mut self.lines, fruit, quantity);
        if removed < quantity {
            tracing::debug!(
                cart_id = %self.cart_id,
                %fruit,
                requested = quantity,
                removed,
                "removal clamped to held quantity"
            );
        } else {
            tracing::debug!(cart_id = %self.cart_id, %fruit, removed, "removed from cart");
        }
        removed
    }

    /// Quantity currently held, 0 when the fruit was never added
    pub fn get_quantity(&self, fruit: Fruit) -> u32 {
        self.lines.get(&fruit).copied().unwrap_or(0)
    }

    /// Total price of the cart under the default bulk discount
    pub fn get_total_cost(&self, catalog: &Catalog) -> Result<Decimal> {
        self.get_total_cost_with(catalog, &BulkDiscount::default())
    }

    /// Total price of the cart under `policy`.
    ///
    /// Lines are priced against the catalog's price list in fruit-name
    /// order. Every held fruit must be listed; empty lines are skipped.
    pub fn get_total_cost_with(&self, catalog: &Catalog, policy: &BulkDiscount) -> Result<Decimal> {
        let prices = catalog.price_list();
        let mut total = Decimal::ZERO;
        for CartItem { fruit, quantity } in self.items() {
            let price = prices.get(&fruit).copied().ok_or_else(|| {
                tracing::warn!(cart_id = %self.cart_id, %fruit, "cart holds a fruit the catalog does not price");
                MarketError::FruitUnavailable(fruit)
            })?;
            total = policy
                .apply(quantity, price)
                .and_then(|subtotal| total.checked_add(subtotal))
                .ok_or_else(|| {
                    tracing::warn!(cart_id = %self.cart_id, %fruit, quantity, %price, "cart total overflows");
                    MarketError::TotalOverflow(fruit)
                })?;
        }
        Ok(total)
    }

    /// Lines with a non-zero quantity, ordered by fruit name
    pub fn items(&self) -> Vec<CartItem> {
        collect_items(&self.lines)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.values().all(|q| *q == 0)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            cart_id: self.cart_id.clone(),
            items: self.items(),
        }
    }

    /// One-line summary such as `"3x Apple, 2x Pear"`
    pub fn summary(&self) -> String {
        format_item_summary(&self.items())
    }

    /// Prices the cart, then empties it.
    ///
    /// On a pricing failure the cart is left unchanged.
    pub fn checkout(&mut self, catalog: &Catalog) -> Result<Receipt> {
        let total = self.get_total_cost(catalog)?;
        let items = self.items();

        if items.is_empty() {
            tracing::info!(cart_id = %self.cart_id, "checkout of an empty cart");
        } else {
            tracing::info!(
                cart_id = %self.cart_id,
                items = %format_item_summary(&items),
                %total,
                "cart checked out"
            );
        }

        self.lines.clear();
        Ok(Receipt {
            cart_id: self.cart_id.clone(),
            items,
            total,
        })
    }

    /// Fruits held in the cart that `catalog` does not carry
    pub fn unpriced_fruits(&self, catalog: &Catalog) -> Vec<Fruit> {
        self.items()
            .into_iter()
            .map(|item| item.fruit)
            .filter(|fruit| !catalog.contains(*fruit))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::CatalogItem;

    fn catalog() -> Catalog {
        Catalog::with_items([
            CatalogItem::new(Fruit::Apple, 15, Decimal::new(400, 2)),
            CatalogItem::new(Fruit::Pear, 15, Decimal::new(400, 2)),
        ])
    }

    #[test]
    fn test_carts_do_not_share_state() {
        let mut first = Cart::new();
        let second = Cart::new();

        first.add(Fruit::Apple, 3);

        assert_eq!(first.get_quantity(Fruit::Apple), 3);
        assert_eq!(second.get_quantity(Fruit::Apple), 0);
        assert_ne!(first.cart_id(), second.cart_id());
    }

    #[test]
    fn test_zero_lines_are_not_priced() {
        let mut cart = Cart::with_id("zero".to_string());
        cart.add(Fruit::Lemon, 2);
        cart.remove(Fruit::Lemon, 2);

        assert_eq!(cart.get_total_cost(&catalog()), Ok(Decimal::ZERO));
        assert!(cart.is_empty());
        assert!(cart.unpriced_fruits(&catalog()).is_empty());
    }

    #[test]
    fn test_unpriced_fruit_fails_total() {
        let mut cart = Cart::new();
        cart.add(Fruit::Apple, 1);
        cart.add(Fruit::Lemon, 1);

        assert_eq!(
            cart.get_total_cost(&catalog()),
            Err(MarketError::FruitUnavailable(Fruit::Lemon))
        );
        assert_eq!(cart.unpriced_fruits(&catalog()), vec![Fruit::Lemon]);
    }

    #[test]
    fn test_failed_checkout_keeps_cart() {
        let mut cart = Cart::new();
        cart.add(Fruit::Lemon, 1);

        assert!(cart.checkout(&catalog()).is_err());
        assert_eq!(cart.get_quantity(Fruit::Lemon), 1);
    }

    #[test]
    fn test_custom_policy_total() {
        let mut cart = Cart::new();
        cart.add(Fruit::Apple, 2);

        let policy = BulkDiscount::new(2, Decimal::new(5, 1)).unwrap();
        assert_eq!(cart.get_total_cost_with(&catalog(), &policy), Ok(Decimal::new(400, 2)));
    }

    #[test]
    fn test_overflowing_total_is_an_error() {
        let catalog = Catalog::with_items([
            CatalogItem::new(Fruit::Apple, 1, Decimal::MAX),
            CatalogItem::new(Fruit::Pear, 1, Decimal::MAX),
        ]);
        let mut cart = Cart::new();
        cart.add_all([(Fruit::Apple, 1), (Fruit::Pear, 1)]);

        assert_eq!(
            cart.get_total_cost(&catalog),
            Err(MarketError::TotalOverflow(Fruit::Pear))
        );
        assert_eq!(cart.checkout(&catalog), Err(MarketError::TotalOverflow(Fruit::Pear)));
        assert_eq!(cart.get_quantity(Fruit::Apple), 1);
    }

    #[test]
    fn test_overflowing_line_is_an_error() {
        let catalog = Catalog::with_items([CatalogItem::new(Fruit::Lemon, 1, Decimal::MAX)]);
        let mut cart = Cart::new();
        cart.add(Fruit::Lemon, 2);

        assert_eq!(
            cart.get_total_cost(&catalog),
            Err(MarketError::TotalOverflow(Fruit::Lemon))
        );
    }

    #[test]
    fn test_unpriced_fruits_lists_zero_stock_as_priced() {
        let mut catalog = catalog();
        catalog.set_quantity_of(Fruit::Pear, 0).unwrap();
        let mut cart = Cart::new();
        cart.add_all([(Fruit::Pear, 1), (Fruit::Orange, 1), (Fruit::Lemon, 1)]);

        assert_eq!(cart.unpriced_fruits(&catalog), vec![Fruit::Lemon, Fruit::Orange]);
    }
}
