//! National holiday discount.
//!
//! Trips entering the road on a national holiday get a share of the
//! running total taken off. The entry date's month and day are compared
//! against the calendar; the year is ignored.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::TollConfig;

use super::discount::{DiscountResult, HOLIDAY_DISCOUNT_REASON};

/// Applies the holiday discount to `running_total` if `entry_date` is a holiday.
///
/// # Example
///
/// ```
/// use ring_road_toll::calculation::apply_holiday_discount;
/// use ring_road_toll::config::ConfigLoader;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::embedded().unwrap();
/// let independence_day = NaiveDate::from_ymd_opt(2025, 8, 14).unwrap();
///
/// let result = apply_holiday_discount(Decimal::new(21, 0), independence_day, loader.config());
/// assert_eq!(result.discount, Decimal::new(105, 1));
/// assert_eq!(result.running_total, Decimal::new(105, 1));
/// ```
pub fn apply_holiday_discount(
    running_total: Decimal,
    entry_date: NaiveDate,
    config: &TollConfig,
) -> DiscountResult {
    if config.is_holiday(entry_date) {
        DiscountResult::applied(
            running_total,
            config.rates().holiday_discount_rate,
            HOLIDAY_DISCOUNT_REASON,
        )
    } else {
        DiscountResult::not_applied(running_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn load_config() -> TollConfig {
        ConfigLoader::embedded()
            .expect("Failed to load config")
            .config()
            .clone()
    }

    #[test]
    fn test_each_holiday_halves_the_total() {
        let config = load_config();
        for date in ["2025-03-23", "2025-08-14", "2025-12-25"] {
            let result = apply_holiday_discount(dec("21.00"), make_date(date), &config);
            assert_eq!(result.discount, dec("10.50"), "{}", date);
            assert_eq!(result.running_total, dec("10.50"), "{}", date);
            assert_eq!(result.reason, Some(HOLIDAY_DISCOUNT_REASON));
        }
    }

    #[test]
    fn test_holiday_in_other_years() {
        let config = load_config();
        assert!(apply_holiday_discount(dec("21"), make_date("2030-03-23"), &config).is_applied());
        assert!(apply_holiday_discount(dec("21"), make_date("1998-12-25"), &config).is_applied());
    }

    #[test]
    fn test_ordinary_day_has_no_discount() {
        let config = load_config();
        let result = apply_holiday_discount(dec("21.00"), make_date("2025-03-24"), &config);

        assert!(!result.is_applied());
        assert_eq!(result.running_total, dec("21.00"));
        assert_eq!(result.reason, None);
    }

    #[test]
    fn test_discount_uses_weekend_total() {
        let config = load_config();
        // Zero Point to NS Interchange exiting on a Sunday: 20 + 1.5
        let result = apply_holiday_discount(dec("21.5"), make_date("2025-03-23"), &config);
        assert_eq!(result.discount, dec("10.75"));
    }
}
