//! Error types shared by the catalog, cart and pricing modules.

use crate::catalog::models::Fruit;

/// Errors raised by fruit market operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarketError {
    /// The fruit is not carried by the catalog, or has no stock left
    #[error("{0} is not available")]
    FruitUnavailable(Fruit),

    /// A line subtotal or cart total does not fit in a `Decimal`
    #[error("Cart total overflows while pricing {0}")]
    TotalOverflow(Fruit),

    /// Catalog input could not be decoded
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(String),

    /// Discount configuration is malformed or out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MarketError>;
