//! Trip distance resolution.
//!
//! Resolves the entry and exit plaza names against the route map and
//! measures the distance between them.

use rust_decimal::Decimal;

use crate::config::TollConfig;
use crate::error::EngineResult;
use crate::models::RoutePoint;

/// The resolved plazas of a trip and the distance between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDistance<'a> {
    /// The entry plaza.
    pub entry: &'a RoutePoint,
    /// The exit plaza.
    pub exit: &'a RoutePoint,
    /// Kilometres between the plazas, regardless of direction.
    pub distance_km: Decimal,
}

/// Resolves both plazas by exact name and measures the trip.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::UnknownRoutePoint`] naming the first
/// plaza (entry checked before exit) that is not on the route map.
///
/// # Example
///
/// ```
/// use ring_road_toll::calculation::resolve_trip;
/// use ring_road_toll::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::embedded().unwrap();
/// let trip = resolve_trip("Bahria Interchange", "NS Interchange", loader.config()).unwrap();
/// assert_eq!(trip.distance_km, Decimal::new(29, 0));
/// ```
pub fn resolve_trip<'a>(
    entry_point: &str,
    exit_point: &str,
    config: &'a TollConfig,
) -> EngineResult<TripDistance<'a>> {
    let entry = config.get_route_point(entry_point)?;
    let exit = config.get_route_point(exit_point)?;

    Ok(TripDistance {
        entry,
        exit,
        distance_km: entry.distance_to(exit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::error::EngineError;

    fn load_config() -> TollConfig {
        ConfigLoader::embedded()
            .expect("Failed to load config")
            .config()
            .clone()
    }

    #[test]
    fn test_adjacent_plazas() {
        let config = load_config();
        let trip = resolve_trip("Zero Point", "NS Interchange", &config).unwrap();

        assert_eq!(trip.entry.name, "Zero Point");
        assert_eq!(trip.exit.name, "NS Interchange");
        assert_eq!(trip.distance_km, Decimal::new(5, 0));
    }

    #[test]
    fn test_full_length_of_road() {
        let config = load_config();
        let trip = resolve_trip("Zero Point", "Bahria Interchange", &config).unwrap();
        assert_eq!(trip.distance_km, Decimal::new(34, 0));
    }

    #[test]
    fn test_reverse_direction_has_same_distance() {
        let config = load_config();
        let outbound = resolve_trip("Ferozpur Interchange", "Raiwand Interchange", &config).unwrap();
        let inbound = resolve_trip("Raiwand Interchange", "Ferozpur Interchange", &config).unwrap();

        assert_eq!(outbound.distance_km, Decimal::new(12, 0));
        assert_eq!(outbound.distance_km, inbound.distance_km);
    }

    #[test]
    fn test_unknown_entry_is_reported() {
        let config = load_config();
        match resolve_trip("Airport", "Zero Point", &config) {
            Err(EngineError::UnknownRoutePoint { name }) => assert_eq!(name, "Airport"),
            other => panic!("Expected UnknownRoutePoint error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_exit_is_reported() {
        let config = load_config();
        match resolve_trip("Zero Point", "ns interchange", &config) {
            Err(EngineError::UnknownRoutePoint { name }) => assert_eq!(name, "ns interchange"),
            other => panic!("Expected UnknownRoutePoint error, got {:?}", other),
        }
    }
}
