//! Bulk discount pricing rule

use rust_decimal::Decimal;

/// Cart quantity at which a fruit line becomes discounted
pub const BULK_DISCOUNT_THRESHOLD: u32 = 5;

/// Multiplier applied to a discounted line (10% off)
pub const BULK_DISCOUNT_FACTOR: Decimal = tenths(9);

/// `n / 10` as a decimal
const fn tenths(n: u32) -> Decimal {
    Decimal::from_parts(n, 0, 0, false, 1)
}

/// Subtotal for `quantity` units at `unit_price`, with the bulk discount
/// applied once the quantity reaches [`BULK_DISCOUNT_THRESHOLD`].
///
/// Returns `None` when the subtotal does not fit in a `Decimal`.
pub fn price_for(quantity: u32, unit_price: Decimal) -> Option<Decimal> {
    line_subtotal(quantity, unit_price, BULK_DISCOUNT_THRESHOLD, BULK_DISCOUNT_FACTOR)
}

pub(crate) fn line_subtotal(
    quantity: u32,
    unit_price: Decimal,
    threshold: u32,
    factor: Decimal,
) -> Option<Decimal> {
    let subtotal = Decimal::from(quantity).checked_mul(unit_price)?;
    if quantity >= threshold {
        subtotal.checked_mul(factor)
    } else {
        Some(subtotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 400)]
    #[case(3, 1200)]
    #[case(4, 1600)]
    #[case(5, 1800)]
    #[case(8, 2880)]
    fn test_price_for_four_dollar_fruit(#[case] quantity: u32, #[case] expected_cents: i64) {
        let unit_price = Decimal::new(400, 2);
        assert_eq!(price_for(quantity, unit_price), Some(Decimal::new(expected_cents, 2)));
    }

    #[test]
    fn test_discount_factor_is_ninety_percent() {
        assert_eq!(BULK_DISCOUNT_FACTOR, Decimal::from_str("0.9").unwrap());
        assert_eq!(tenths(10), Decimal::ONE);
    }

    #[test]
    fn test_price_for_overflow_is_none() {
        let unit_price = Decimal::from_str("100000000000000000000").unwrap();
        assert_eq!(price_for(1_000_000_000, unit_price), None);
        assert_eq!(price_for(2, Decimal::MAX), None);
    }
}
