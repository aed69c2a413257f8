//! Rate schedule snapshot returned by the rates query.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A descriptive snapshot of the tariff constants.
///
/// This carries no behaviour; the calculator reads the rates from the
/// loaded configuration directly. The discount and holiday fields keep
/// the JSON keys existing clients read: `numberPlateDiscount`,
/// `holidayDiscount` and `nationalHolidays`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSchedule {
    /// Flat charge per trip.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_rate: Decimal,
    /// Charge per kilometre.
    #[serde(with = "rust_decimal::serde::float")]
    pub distance_rate: Decimal,
    /// Multiplier on the distance charge for weekend exits.
    #[serde(with = "rust_decimal::serde::float")]
    pub weekend_multiplier: Decimal,
    /// Fraction taken off by the number plate rule.
    #[serde(rename = "numberPlateDiscount", with = "rust_decimal::serde::float")]
    pub number_plate_discount_rate: Decimal,
    /// Fraction taken off on national holidays.
    #[serde(rename = "holidayDiscount", with = "rust_decimal::serde::float")]
    pub holiday_discount_rate: Decimal,
    /// Holiday dates as labels, e.g. "March 23".
    #[serde(rename = "nationalHolidays")]
    pub holiday_dates: Vec<String>,
}
