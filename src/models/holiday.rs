//! National holiday model.
//!
//! Holidays recur every year on the same month and day, so they are
//! stored without a year component.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar month and day with no year, such as `03-23`.
///
/// # Example
///
/// ```
/// use ring_road_toll::models::MonthDay;
/// use chrono::NaiveDate;
///
/// let pakistan_day: MonthDay = "03-23".parse().unwrap();
/// assert!(pakistan_day.matches(NaiveDate::from_ymd_opt(2031, 3, 23).unwrap()));
/// assert_eq!(pakistan_day.to_string(), "03-23");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a month-day, returning `None` if it never occurs in any year.
    ///
    /// February 29 is accepted because it exists in leap years.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // 2000 is a leap year, so every real month-day resolves.
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| Self { month, day })
    }

    /// Returns the month-day of a calendar date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns true if the given date falls on this month-day in any year.
    pub fn matches(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    /// Human-readable label such as "March 23".
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(2000, self.month, self.day) {
            Some(date) => date.format("%B %-d").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Error returned when a month-day string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthDayError(String);

impl fmt::Display for ParseMonthDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a month-day in MM-DD format, got '{}'", self.0)
    }
}

impl std::error::Error for ParseMonthDayError {}

impl FromStr for MonthDay {
    type Err = ParseMonthDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMonthDayError(s.to_string());
        let (month, day) = s.split_once('-').ok_or_else(err)?;
        if month.len() != 2 || day.len() != 2 {
            return Err(err());
        }
        let month = month.parse().map_err(|_| err())?;
        let day = day.parse().map_err(|_| err())?;
        MonthDay::new(month, day).ok_or_else(err)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A recurring national holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalHoliday {
    /// The month and day the holiday falls on every year.
    pub date: MonthDay,
    /// The name of the holiday.
    pub name: String,
}
