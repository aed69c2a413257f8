//! Day detection.
//!
//! Weekday numbering follows chrono's [`Weekday`], which is fixed and
//! independent of locale: Monday through Sunday.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day a plaza was passed on.
///
/// # Example
///
/// ```
/// use ring_road_toll::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday - weekend surcharge applies to exits.
    Saturday,
    /// Sunday - weekend surcharge applies to exits.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given datetime.
///
/// # Example
///
/// ```
/// use ring_road_toll::calculation::{get_day_type, DayType};
/// use chrono::NaiveDateTime;
///
/// // 2025-07-12 is a Saturday
/// let saturday = NaiveDateTime::parse_from_str("2025-07-12 15:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2025-07-11 is a Friday
/// let friday = NaiveDateTime::parse_from_str("2025-07-11 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_day_type(friday), DayType::Weekday);
/// ```
pub fn get_day_type(datetime: NaiveDateTime) -> DayType {
    match datetime.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true if the datetime falls on a Saturday or Sunday.
pub fn is_weekend(datetime: NaiveDateTime) -> bool {
    get_day_type(datetime).is_weekend()
}
