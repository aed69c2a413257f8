//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on monetary amounts.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to whole cents, with halves rounded up.
///
/// # Example
///
/// ```
/// use ring_road_toll::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("1.005").unwrap()), Decimal::from_str("1.01").unwrap());
/// assert_eq!(round_money(Decimal::from_str("1.004").unwrap()), Decimal::from_str("1.00").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
