//! Route point model.
//!
//! A route point is a toll plaza on the ring road, identified by name and
//! located by its distance from the origin (Zero Point).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named toll plaza with a fixed distance from the origin.
///
/// # Example
///
/// ```
/// use ring_road_toll::models::RoutePoint;
/// use rust_decimal::Decimal;
///
/// let point = RoutePoint::new("NS Interchange", Decimal::new(5, 0));
/// assert_eq!(point.name, "NS Interchange");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePoint {
    /// Unique name of the plaza (matched case-sensitively).
    pub name: String,
    /// Distance from the origin in kilometres.
    pub distance_km: Decimal,
}

impl RoutePoint {
    /// Creates a new route point.
    pub fn new(name: impl Into<String>, distance_km: Decimal) -> Self {
        Self {
            name: name.into(),
            distance_km,
        }
    }

    /// Returns the road distance between this point and another.
    ///
    /// The distance does not depend on the direction of travel.
    pub fn distance_to(&self, other: &RoutePoint) -> Decimal {
        (other.distance_km - self.distance_km).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_is_direction_agnostic() {
        let zero = RoutePoint::new("Zero Point", Decimal::ZERO);
        let bahria = RoutePoint::new("Bahria Interchange", Decimal::new(34, 0));

        assert_eq!(zero.distance_to(&bahria), Decimal::new(34, 0));
        assert_eq!(bahria.distance_to(&zero), Decimal::new(34, 0));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let point = RoutePoint::new("Ph4 Interchange", Decimal::new(10, 0));
        assert_eq!(point.distance_to(&point), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = "name: Lake City Interchange\ndistance_km: \"24\"\n";
        let point: RoutePoint = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(point.name, "Lake City Interchange");
        assert_eq!(point.distance_km, Decimal::new(24, 0));
    }
}
