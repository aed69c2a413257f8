//! Toll calculation.
//!
//! [`calculate_toll`] chains the individual rules. The order is part of
//! the tariff: each discount is a share of the running total left by the
//! steps before it, not of the undiscounted fare.
//!
//! 1. Trip distance from the route map
//! 2. Base toll plus distance charge
//! 3. Weekend multiplier on the distance charge (exit date)
//! 4. National holiday discount (entry date)
//! 5. Number plate discount (entry weekday)

use rust_decimal::Decimal;

use crate::config::TollConfig;
use crate::error::EngineResult;
use crate::models::{TollBreakdown, TollRequest, TollResult};

use super::{
    apply_holiday_discount, apply_number_plate_discount, apply_weekend_surcharge, resolve_trip,
    round_money,
};

/// Calculates the toll for a single trip.
///
/// This is a pure function of the request and configuration; calling it
/// again with the same inputs returns the same result.
///
/// # Errors
///
/// - [`crate::error::EngineError::UnknownRoutePoint`] if either plaza is not on the route map
/// - [`crate::error::EngineError::MalformedPlate`] if the plate does not end in a digit
///
/// # Example
///
/// ```
/// use ring_road_toll::calculation::calculate_toll;
/// use ring_road_toll::config::ConfigLoader;
/// use ring_road_toll::models::TollRequest;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::embedded().unwrap();
/// // 2025-07-11 is a Friday
/// let request = TollRequest::new(
///     "ABC-123",
///     "Zero Point",
///     "NS Interchange",
///     NaiveDateTime::parse_from_str("2025-07-11 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2025-07-11 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// );
///
/// let result = calculate_toll(&request, loader.config()).unwrap();
/// assert_eq!(result.toll_amount, Decimal::from_str("21.00").unwrap());
/// assert!(result.discount_reasons.is_empty());
/// ```
pub fn calculate_toll(request: &TollRequest, config: &TollConfig) -> EngineResult<TollResult> {
    let rates = config.rates();

    let trip = resolve_trip(&request.entry_point, &request.exit_point, config)?;

    let base_toll = rates.base_rate;
    let distance_charge = trip.distance_km * rates.distance_rate;
    let surcharge = apply_weekend_surcharge(distance_charge, request.exit_time, rates);

    let running_total = base_toll + surcharge.distance_toll;
    let mut discount_reasons = Vec::new();

    let holiday = apply_holiday_discount(running_total, request.entry_time.date(), config);
    discount_reasons.extend(holiday.reason.map(String::from));

    let number_plate = apply_number_plate_discount(
        &request.vehicle_plate,
        request.entry_time,
        holiday.running_total,
        rates,
    )?;
    discount_reasons.extend(number_plate.reason.map(String::from));

    let holiday_discount = round_money(holiday.discount);
    let number_plate_discount = round_money(number_plate.discount);
    let final_amount = round_money(number_plate.running_total);

    Ok(TollResult {
        toll_amount: final_amount,
        base_toll: round_money(base_toll),
        distance_toll: round_money(surcharge.distance_toll),
        distance_km: trip.distance_km,
        discount_applied: holiday_discount + number_plate_discount,
        discount_reasons,
        breakdown: TollBreakdown {
            base_rate: round_money(base_toll),
            distance_rate: round_money(distance_charge),
            weekend_multiplier: surcharge.multiplier,
            number_plate_discount,
            holiday_discount,
            final_amount,
        },
    })
}

/// Returns the unrounded fare implied by a result's parts.
///
/// `base_toll + distance_toll - holiday_discount - number_plate_discount`,
/// using the rounded figures reported in the result.
pub fn reconcile_fare(result: &TollResult) -> Decimal {
    result.base_toll + result.distance_toll
        - result.breakdown.holiday_discount
        - result.breakdown.number_plate_discount
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{HOLIDAY_DISCOUNT_REASON, NUMBER_PLATE_DISCOUNT_REASON};
    use crate::config::{ConfigLoader, RateConfig};
    use crate::error::EngineError;
    use crate::models::{NationalHoliday, RoutePoint};
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn load_config() -> TollConfig {
        ConfigLoader::embedded()
            .expect("Failed to load config")
            .config()
            .clone()
    }

    fn trip(plate: &str, entry: &str, exit: &str, entry_date: &str, exit_date: &str) -> TollRequest {
        TollRequest::new(
            plate,
            entry,
            exit,
            make_datetime(entry_date, "08:00:00"),
            make_datetime(exit_date, "09:00:00"),
        )
    }

    fn same_day(plate: &str, date: &str) -> TollRequest {
        trip(plate, "Zero Point", "NS Interchange", date, date)
    }

    #[test]
    fn test_friday_weekday_fare() {
        let result = calculate_toll(&same_day("ABC-123", "2025-07-11"), &load_config()).unwrap();

        assert_eq!(result.distance_km, dec("5"));
        assert_eq!(result.base_toll, dec("20"));
        assert_eq!(result.distance_toll, dec("1.00"));
        assert_eq!(result.breakdown.weekend_multiplier, Decimal::ONE);
        assert_eq!(result.discount_applied, Decimal::ZERO);
        assert!(result.discount_reasons.is_empty());
        assert_eq!(result.toll_amount, dec("21.00"));
        assert_eq!(result.breakdown.final_amount, dec("21.00"));
    }

    #[test]
    fn test_saturday_weekend_multiplier() {
        let result = calculate_toll(&same_day("ABC-123", "2025-07-12"), &load_config()).unwrap();

        assert_eq!(result.breakdown.weekend_multiplier, dec("1.5"));
        assert_eq!(result.distance_toll, dec("1.50"));
        assert_eq!(result.breakdown.distance_rate, dec("1.00"));
        assert_eq!(result.toll_amount, dec("21.50"));
    }

    #[test]
    fn test_sunday_weekend_multiplier() {
        let result = calculate_toll(&same_day("ABC-124", "2025-07-13"), &load_config()).unwrap();

        assert_eq!(result.breakdown.weekend_multiplier, dec("1.5"));
        assert_eq!(result.toll_amount, dec("21.50"));
    }

    #[test]
    fn test_holiday_discount_on_weekday() {
        // 2026-03-23 is a Monday; an odd plate gets no plate discount on Mondays
        let result = calculate_toll(&same_day("ABC-123", "2026-03-23"), &load_config()).unwrap();

        assert_eq!(result.breakdown.holiday_discount, dec("10.50"));
        assert_eq!(result.breakdown.number_plate_discount, Decimal::ZERO);
        assert_eq!(result.discount_applied, dec("10.50"));
        assert_eq!(result.discount_reasons, vec![HOLIDAY_DISCOUNT_REASON]);
        assert_eq!(result.toll_amount, dec("10.50"));
    }

    #[test]
    fn test_holiday_on_weekend_discounts_surcharged_total() {
        // 2025-03-23 is a Sunday
        let result = calculate_toll(&same_day("ABC-123", "2025-03-23"), &load_config()).unwrap();

        assert_eq!(result.distance_toll, dec("1.50"));
        assert_eq!(result.breakdown.holiday_discount, dec("10.75"));
        assert_eq!(result.toll_amount, dec("10.75"));
    }

    #[test]
    fn test_even_plate_on_monday() {
        let result = calculate_toll(&same_day("ABC-124", "2025-07-07"), &load_config()).unwrap();

        assert_eq!(result.breakdown.number_plate_discount, dec("2.10"));
        assert_eq!(result.discount_applied, dec("2.10"));
        assert_eq!(result.discount_reasons, vec![NUMBER_PLATE_DISCOUNT_REASON]);
        assert_eq!(result.toll_amount, dec("18.90"));
    }

    #[test]
    fn test_even_plate_on_friday_has_no_discount() {
        let result = calculate_toll(&same_day("ABC-124", "2025-07-11"), &load_config()).unwrap();

        assert_eq!(result.breakdown.number_plate_discount, Decimal::ZERO);
        assert_eq!(result.toll_amount, dec("21.00"));
    }

    #[test]
    fn test_odd_plate_on_monday_has_no_discount() {
        let result = calculate_toll(&same_day("ABC-123", "2025-07-07"), &load_config()).unwrap();
        assert_eq!(result.discount_applied, Decimal::ZERO);
    }

    #[test]
    fn test_holiday_and_plate_discounts_stack() {
        // 2026-03-23: holiday and a Monday
        let result = calculate_toll(&same_day("ABC-124", "2026-03-23"), &load_config()).unwrap();

        assert_eq!(result.breakdown.holiday_discount, dec("10.50"));
        assert_eq!(result.breakdown.number_plate_discount, dec("1.05"));
        assert_eq!(result.discount_applied, dec("11.55"));
        assert_eq!(
            result.discount_reasons,
            vec![HOLIDAY_DISCOUNT_REASON, NUMBER_PLATE_DISCOUNT_REASON]
        );
        assert_eq!(result.toll_amount, dec("9.45"));
    }

    #[test]
    fn test_longer_routes() {
        let config = load_config();

        let result = calculate_toll(
            &trip("ABC-123", "NS Interchange", "Bahria Interchange", "2025-07-11", "2025-07-11"),
            &config,
        )
        .unwrap();
        assert_eq!(result.distance_km, dec("29"));
        assert_eq!(result.distance_toll, dec("5.80"));
        assert_eq!(result.toll_amount, dec("25.80"));

        let result = calculate_toll(
            &trip("ABC-123", "Lake City Interchange", "Raiwand Interchange", "2025-07-11", "2025-07-11"),
            &config,
        )
        .unwrap();
        assert_eq!(result.distance_km, dec("5"));
        assert_eq!(result.toll_amount, dec("21.00"));
    }

    #[test]
    fn test_weekend_keyed_on_exit_and_discounts_on_entry() {
        // Enter Friday 2025-07-11 with an even plate, leave Saturday
        let result = calculate_toll(
            &trip("ABC-124", "Zero Point", "Bahria Interchange", "2025-07-11", "2025-07-12"),
            &load_config(),
        )
        .unwrap();
        assert_eq!(result.breakdown.weekend_multiplier, dec("1.5"));
        assert_eq!(result.discount_applied, Decimal::ZERO);

        // Enter Sunday, leave Monday 2025-07-14 with an even plate
        let result = calculate_toll(
            &trip("ABC-124", "Zero Point", "Bahria Interchange", "2025-07-13", "2025-07-14"),
            &load_config(),
        )
        .unwrap();
        assert_eq!(result.breakdown.weekend_multiplier, Decimal::ONE);
        assert_eq!(result.discount_applied, Decimal::ZERO);
    }

    #[test]
    fn test_holiday_keyed_on_entry_date() {
        // Enter 2025-08-13 (not a holiday), leave on Independence Day
        let result = calculate_toll(
            &trip("ABC-124", "Zero Point", "NS Interchange", "2025-08-13", "2025-08-14"),
            &load_config(),
        )
        .unwrap();
        assert_eq!(result.breakdown.holiday_discount, Decimal::ZERO);
    }

    #[test]
    fn test_reverse_direction_prices_the_same() {
        let config = load_config();
        let outbound = same_day("ABC-123", "2025-07-10");
        let inbound = outbound.reversed();

        let a = calculate_toll(&outbound, &config).unwrap();
        let b = calculate_toll(&inbound, &config).unwrap();

        assert_eq!(a.distance_km, b.distance_km);
        assert_eq!(a.base_toll, b.base_toll);
        assert_eq!(a.distance_toll, b.distance_toll);
        assert_eq!(a, b);
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let config = load_config();
        let request = same_day("ABC-124", "2026-03-23");

        let first = calculate_toll(&request, &config).unwrap();
        for _ in 0..10 {
            assert_eq!(calculate_toll(&request, &config).unwrap(), first);
        }
    }

    #[test]
    fn test_unknown_entry_point() {
        let request = trip("ABC-123", "Airport", "Zero Point", "2025-07-11", "2025-07-11");
        match calculate_toll(&request, &load_config()) {
            Err(EngineError::UnknownRoutePoint { name }) => assert_eq!(name, "Airport"),
            other => panic!("Expected UnknownRoutePoint error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_exit_point() {
        let request = trip("ABC-123", "Zero Point", "Bahria", "2025-07-11", "2025-07-11");
        assert!(matches!(
            calculate_toll(&request, &load_config()),
            Err(EngineError::UnknownRoutePoint { .. })
        ));
    }

    #[test]
    fn test_malformed_plate() {
        let request = same_day("ABC-XYZ", "2025-07-11");
        match calculate_toll(&request, &load_config()) {
            Err(EngineError::MalformedPlate { plate }) => assert_eq!(plate, "ABC-XYZ"),
            other => panic!("Expected MalformedPlate error, got {:?}", other),
        }
    }

    #[test]
    fn test_reconcile_fare_matches_final_amount() {
        let result = calculate_toll(&same_day("ABC-124", "2026-03-23"), &load_config()).unwrap();
        assert_eq!(reconcile_fare(&result), result.breakdown.final_amount);
    }

    #[test]
    fn test_discount_applied_sums_rounded_parts() {
        // Base 1 and 0.15/km over 5 km gives 1.75; half of that is 0.875 and
        // a tenth of the remaining 0.875 is 0.0875. Rounded separately the
        // discounts are 0.88 + 0.09 = 0.97; rounding their sum would give 0.96.
        let rates = RateConfig {
            base_rate: dec("1"),
            distance_rate: dec("0.15"),
            weekend_multiplier: dec("1.5"),
            number_plate_discount_rate: dec("0.1"),
            holiday_discount_rate: dec("0.5"),
        };
        let config = TollConfig::new(
            vec![
                RoutePoint::new("Zero Point", dec("0")),
                RoutePoint::new("NS Interchange", dec("5")),
            ],
            vec![NationalHoliday {
                date: "03-23".parse().unwrap(),
                name: "Pakistan Day".to_string(),
            }],
            rates,
        )
        .unwrap();

        let result = calculate_toll(&same_day("ABC-124", "2026-03-23"), &config).unwrap();

        assert_eq!(result.breakdown.holiday_discount, dec("0.88"));
        assert_eq!(result.breakdown.number_plate_discount, dec("0.09"));
        assert_eq!(result.discount_applied, dec("0.97"));
        assert_eq!(result.toll_amount, dec("0.79"));
    }
}
