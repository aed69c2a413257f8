//! Weekend surcharge.
//!
//! The distance charge is multiplied when the vehicle leaves the road on a
//! Saturday or Sunday. Only the exit timestamp is considered.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::config::RateConfig;

use super::{DayType, get_day_type};

/// The result of applying the weekend surcharge to a distance charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekendSurchargeResult {
    /// The day type of the exit.
    pub day_type: DayType,
    /// The multiplier used: 1 on weekdays.
    pub multiplier: Decimal,
    /// The distance charge after the multiplier.
    pub distance_toll: Decimal,
}

/// Applies the weekend multiplier to `distance_charge` if `exit_time` is on a weekend.
///
/// # Example
///
/// ```
/// use ring_road_toll::calculation::apply_weekend_surcharge;
/// use ring_road_toll::config::ConfigLoader;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::embedded().unwrap();
/// let saturday = NaiveDateTime::parse_from_str("2025-07-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let result = apply_weekend_surcharge(Decimal::ONE, saturday, loader.config().rates());
/// assert_eq!(result.distance_toll, Decimal::new(15, 1));
/// ```
pub fn apply_weekend_surcharge(
    distance_charge: Decimal,
    exit_time: NaiveDateTime,
    rates: &RateConfig,
) -> WeekendSurchargeResult {
    let day_type = get_day_type(exit_time);
    let multiplier = if day_type.is_weekend() {
        rates.weekend_multiplier
    } else {
        Decimal::ONE
    };

    WeekendSurchargeResult {
        day_type,
        multiplier,
        distance_toll: distance_charge * multiplier,
    }
}
