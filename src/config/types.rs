//! Configuration types for toll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`TollConfig`] the calculator reads from.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{NationalHoliday, RateSchedule, RoutePoint};

/// Route configuration file structure (`routes.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesConfig {
    /// Route points ordered by increasing distance from the origin.
    pub route_points: Vec<RoutePoint>,
}

/// Holiday configuration file structure (`holidays.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// Recurring national holidays.
    pub holidays: Vec<NationalHoliday>,
}

/// Tariff constants (`rates.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateConfig {
    /// Flat charge per trip.
    pub base_rate: Decimal,
    /// Charge per kilometre travelled.
    pub distance_rate: Decimal,
    /// Multiplier on the distance charge when the exit is on a weekend.
    pub weekend_multiplier: Decimal,
    /// Fraction of the running total taken off by the number plate rule.
    pub number_plate_discount_rate: Decimal,
    /// Fraction of the running total taken off on national holidays.
    pub holiday_discount_rate: Decimal,
}

/// The complete, validated toll configuration.
///
/// Built once at startup and never mutated; share it behind an `Arc` or a
/// plain reference.
#[derive(Debug, Clone)]
pub struct TollConfig {
    route_points: Vec<RoutePoint>,
    holidays: Vec<NationalHoliday>,
    rates: RateConfig,
}

impl TollConfig {
    /// Creates a configuration after checking it is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if there are no route points,
    /// a name is blank or repeated, distances are negative or not strictly
    /// ascending, a holiday is listed twice, or a rate is out of range.
    pub fn new(
        route_points: Vec<RoutePoint>,
        holidays: Vec<NationalHoliday>,
        rates: RateConfig,
    ) -> EngineResult<Self> {
        validate_route_points(&route_points)?;
        validate_holidays(&holidays)?;
        validate_rates(&rates)?;

        Ok(Self {
            route_points,
            holidays,
            rates,
        })
    }

    /// Returns all route points in distance-ascending order.
    pub fn route_points(&self) -> &[RoutePoint] {
        &self.route_points
    }

    /// Returns the national holidays.
    pub fn holidays(&self) -> &[NationalHoliday] {
        &self.holidays
    }

    /// Returns the tariff constants.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Looks up a route point by exact, case-sensitive name.
    pub fn get_route_point(&self, name: &str) -> EngineResult<&RoutePoint> {
        self.route_points
            .iter()
            .find(|point| point.name == name)
            .ok_or_else(|| EngineError::UnknownRoutePoint {
                name: name.to_string(),
            })
    }

    /// Returns true if `name` is a known route point.
    pub fn has_route_point(&self, name: &str) -> bool {
        self.route_points.iter().any(|point| point.name == name)
    }

    /// Returns the route point names in distance-ascending order.
    pub fn list_route_points(&self) -> Vec<&str> {
        self.route_points
            .iter()
            .map(|point| point.name.as_str())
            .collect()
    }

    /// Returns the holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&NationalHoliday> {
        self.holidays.iter().find(|holiday| holiday.date.matches(date))
    }

    /// Returns true if `date` is a national holiday in any year.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Returns a descriptive snapshot of the current tariff.
    pub fn current_rate_schedule(&self) -> RateSchedule {
        RateSchedule {
            base_rate: self.rates.base_rate,
            distance_rate: self.rates.distance_rate,
            weekend_multiplier: self.rates.weekend_multiplier,
            number_plate_discount_rate: self.rates.number_plate_discount_rate,
            holiday_discount_rate: self.rates.holiday_discount_rate,
            holiday_dates: self.holidays.iter().map(|h| h.date.label()).collect(),
        }
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        message: message.into(),
    }
}

fn validate_route_points(route_points: &[RoutePoint]) -> EngineResult<()> {
    if route_points.is_empty() {
        return Err(invalid("no route points defined"));
    }

    let mut seen = HashSet::new();
    for point in route_points {
        if point.name.trim().is_empty() {
            return Err(invalid("route point name cannot be blank"));
        }
        if !seen.insert(point.name.as_str()) {
            return Err(invalid(format!("duplicate route point '{}'", point.name)));
        }
        if point.distance_km.is_sign_negative() {
            return Err(invalid(format!(
                "route point '{}' has negative distance {}",
                point.name, point.distance_km
            )));
        }
    }

    for pair in route_points.windows(2) {
        if pair[1].distance_km <= pair[0].distance_km {
            return Err(invalid(format!(
                "route point '{}' ({} km) must be further from the origin than '{}' ({} km)",
                pair[1].name, pair[1].distance_km, pair[0].name, pair[0].distance_km
            )));
        }
    }

    Ok(())
}

fn validate_holidays(holidays: &[NationalHoliday]) -> EngineResult<()> {
    let mut seen = HashSet::new();
    for holiday in holidays {
        if !seen.insert(holiday.date) {
            return Err(invalid(format!("holiday {} listed twice", holiday.date)));
        }
    }
    Ok(())
}

fn validate_rates(rates: &RateConfig) -> EngineResult<()> {
    let non_negative = [
        ("base_rate", rates.base_rate),
        ("distance_rate", rates.distance_rate),
        ("weekend_multiplier", rates.weekend_multiplier),
    ];
    for (name, value) in non_negative {
        if value.is_sign_negative() {
            return Err(invalid(format!("{} cannot be negative, got {}", name, value)));
        }
    }

    let fractions = [
        ("number_plate_discount_rate", rates.number_plate_discount_rate),
        ("holiday_discount_rate", rates.holiday_discount_rate),
    ];
    for (name, value) in fractions {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(invalid(format!(
                "{} must be between 0 and 1, got {}",
                name, value
            )));
        }
    }

    Ok(())
}
