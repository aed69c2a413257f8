//! Number plate rules.
//!
//! Plates have the form `LLL-NNN`. The last digit decides the plate's
//! parity, and the weekday of entry decides which parity is discounted:
//!
//! | Entry day          | Discounted plates |
//! |--------------------|-------------------|
//! | Monday, Wednesday  | even last digit   |
//! | Tuesday, Thursday  | odd last digit    |
//! | Friday to Sunday   | none              |

use chrono::{Datelike, NaiveDateTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::error::{EngineError, EngineResult};

use super::discount::{DiscountResult, NUMBER_PLATE_DISCOUNT_REASON};

static PLATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}-[0-9]{3}$").expect("Valid plate pattern"));

/// Whether a plate's last digit is even or odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlateParity {
    /// Last digit is 0, 2, 4, 6 or 8.
    Even,
    /// Last digit is 1, 3, 5, 7 or 9.
    Odd,
}

impl PlateParity {
    /// Returns the parity of a digit.
    pub fn of(digit: u32) -> Self {
        if digit % 2 == 0 {
            PlateParity::Even
        } else {
            PlateParity::Odd
        }
    }
}

/// Returns true if `plate` is three uppercase letters, a hyphen and three digits.
///
/// # Example
///
/// ```
/// use ring_road_toll::calculation::validate_number_plate;
///
/// assert!(validate_number_plate("ABC-123"));
/// assert!(!validate_number_plate("ABC123"));
/// assert!(!validate_number_plate("abc-123"));
/// ```
pub fn validate_number_plate(plate: &str) -> bool {
    PLATE_PATTERN.is_match(plate)
}

/// Returns the last digit of the plate's trailing run of digits.
///
/// This is more lenient than [`validate_number_plate`]: any plate ending
/// in a digit is accepted.
///
/// # Errors
///
/// Returns [`EngineError::MalformedPlate`] if the plate does not end in
/// an ASCII digit.
pub fn last_plate_digit(plate: &str) -> EngineResult<u32> {
    plate
        .chars()
        .last()
        .filter(char::is_ascii_digit)
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| EngineError::MalformedPlate {
            plate: plate.to_string(),
        })
}

/// Returns the parity discounted on `weekday`, if any.
pub fn discounted_parity(weekday: Weekday) -> Option<PlateParity> {
    match weekday {
        Weekday::Mon | Weekday::Wed => Some(PlateParity::Even),
        Weekday::Tue | Weekday::Thu => Some(PlateParity::Odd),
        Weekday::Fri | Weekday::Sat | Weekday::Sun => None,
    }
}

/// Applies the number plate discount to `running_total`.
///
/// The plate's last digit is always extracted, so a malformed plate is an
/// error even on days when no discount could apply.
///
/// # Example
///
/// ```
/// use ring_road_toll::calculation::apply_number_plate_discount;
/// use ring_road_toll::config::ConfigLoader;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::embedded().unwrap();
/// // 2025-07-07 is a Monday; plate ends in an even digit
/// let monday = NaiveDateTime::parse_from_str("2025-07-07 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let result = apply_number_plate_discount("ABC-124", monday, Decimal::new(21, 0), loader.config().rates()).unwrap();
/// assert_eq!(result.discount, Decimal::new(21, 1));
/// ```
pub fn apply_number_plate_discount(
    plate: &str,
    entry_time: NaiveDateTime,
    running_total: Decimal,
    rates: &RateConfig,
) -> EngineResult<DiscountResult> {
    let parity = PlateParity::of(last_plate_digit(plate)?);

    let result = if discounted_parity(entry_time.weekday()) == Some(parity) {
        DiscountResult::applied(
            running_total,
            rates.number_plate_discount_rate,
            NUMBER_PLATE_DISCOUNT_REASON,
        )
    } else {
        DiscountResult::not_applied(running_total)
    };

    Ok(result)
}
