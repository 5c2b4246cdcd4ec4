//! Discount policy configuration.
//!
//! The built-in policy is 10% off any fruit line of five or more units.
//! It can be overridden from the environment:
//!
//! - `FRUIT_MARKET_DISCOUNT_THRESHOLD`: quantity at which the discount starts
//! - `FRUIT_MARKET_DISCOUNT_FACTOR`: multiplier applied to discounted lines

use crate::error::{MarketError, Result};
use crate::pricing::{line_subtotal, BULK_DISCOUNT_FACTOR, BULK_DISCOUNT_THRESHOLD};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{env, str::FromStr};

pub const THRESHOLD_VAR: &str = "FRUIT_MARKET_DISCOUNT_THRESHOLD";
pub const FACTOR_VAR: &str = "FRUIT_MARKET_DISCOUNT_FACTOR";

/// Bulk discount applied per fruit line of a cart.
///
/// Every constructor, deserialization included, goes through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBulkDiscount")]
pub struct BulkDiscount {
    /// Minimum line quantity that receives the discount
    threshold: u32,

    /// Multiplier applied to a discounted line subtotal
    factor: Decimal,
}

/// Unvalidated wire form of [`BulkDiscount`]
#[derive(Deserialize)]
struct RawBulkDiscount {
    threshold: u32,
    factor: Decimal,
}

impl TryFrom<RawBulkDiscount> for BulkDiscount {
    type Error = MarketError;

    fn try_from(raw: RawBulkDiscount) -> Result<Self> {
        Self::new(raw.threshold, raw.factor)
    }
}

impl Default for BulkDiscount {
    fn default() -> Self {
        Self {
            threshold: BULK_DISCOUNT_THRESHOLD,
            factor: BULK_DISCOUNT_FACTOR,
        }
    }
}

impl BulkDiscount {
    pub fn new(threshold: u32, factor: Decimal) -> Result<Self> {
        let policy = Self { threshold, factor };
        policy.validate()?;
        Ok(policy)
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn factor(&self) -> Decimal {
        self.factor
    }

    /// Loads the policy from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the policy from `lookup`, using the defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let threshold = match lookup(THRESHOLD_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|e| MarketError::InvalidConfig(format!("{}={:?}: {}", THRESHOLD_VAR, raw, e)))?,
            None => defaults.threshold,
        };

        let factor = match lookup(FACTOR_VAR) {
            Some(raw) => Decimal::from_str(raw.trim())
                .map_err(|e| MarketError::InvalidConfig(format!("{}={:?}: {}", FACTOR_VAR, raw, e)))?,
            None => defaults.factor,
        };

        let policy = Self::new(threshold, factor)?;
        tracing::info!(threshold = policy.threshold, factor = %policy.factor, "discount policy loaded");
        Ok(policy)
    }

    /// Subtotal for `quantity` units at `unit_price` under this policy,
    /// or `None` when it does not fit in a `Decimal`
    pub fn apply(&self, quantity: u32, unit_price: Decimal) -> Option<Decimal> {
        line_subtotal(quantity, unit_price, self.threshold, self.factor)
    }

    fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(MarketError::InvalidConfig(
                "discount threshold must be at least 1".to_string(),
            ));
        }

        if self.factor.is_sign_negative() || self.factor > Decimal::ONE {
            return Err(MarketError::InvalidConfig(format!(
                "discount factor must be between 0 and 1, got {}",
                self.factor
            )));
        }

        Ok(())
    }
}
