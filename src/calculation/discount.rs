//! Shared shape of a discount rule's outcome.

use rust_decimal::Decimal;

/// Reason recorded when the national holiday discount applies.
pub const HOLIDAY_DISCOUNT_REASON: &str = "National Holiday (50% discount)";

/// Reason recorded when the number plate discount applies.
pub const NUMBER_PLATE_DISCOUNT_REASON: &str = "Number plate discount (10%)";

/// The outcome of applying one discount rule to a running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountResult {
    /// The unrounded amount taken off; zero when the rule did not apply.
    pub discount: Decimal,
    /// The running total after the discount.
    pub running_total: Decimal,
    /// Why the discount applied, or `None` if it did not.
    pub reason: Option<&'static str>,
}

impl DiscountResult {
    /// A rule that took `rate` of `running_total` off.
    ///
    /// A zero discount is reported as not applied, so no reason is recorded.
    pub(crate) fn applied(running_total: Decimal, rate: Decimal, reason: &'static str) -> Self {
        let discount = running_total * rate;
        if discount <= Decimal::ZERO {
            return Self::not_applied(running_total);
        }
        Self {
            discount,
            running_total: running_total - discount,
            reason: Some(reason),
        }
    }

    /// A rule that did not apply.
    pub(crate) fn not_applied(running_total: Decimal) -> Self {
        Self {
            discount: Decimal::ZERO,
            running_total,
            reason: None,
        }
    }

    /// Returns true if the rule reduced the running total.
    pub fn is_applied(&self) -> bool {
        self.discount > Decimal::ZERO
    }
}
