//! Calculation logic for the Ring Road Toll Engine.
//!
//! This module contains the toll calculation and the rules it chains:
//! trip distance resolution, day detection, the weekend surcharge, the
//! national holiday discount, number plate rules and monetary rounding.

mod day_detection;
mod discount;
mod holiday_discount;
mod number_plate;
mod rounding;
mod route_distance;
mod toll;
mod weekend_surcharge;

pub use day_detection::{DayType, get_day_type, is_weekend};
pub use discount::{DiscountResult, HOLIDAY_DISCOUNT_REASON, NUMBER_PLATE_DISCOUNT_REASON};
pub use holiday_discount::apply_holiday_discount;
pub use number_plate::{
    PlateParity, apply_number_plate_discount, discounted_parity, last_plate_digit,
    validate_number_plate,
};
pub use rounding::{MONEY_DECIMAL_PLACES, round_money};
pub use route_distance::{TripDistance, resolve_trip};
pub use toll::{calculate_toll, reconcile_fare};
pub use weekend_surcharge::{WeekendSurchargeResult, apply_weekend_surcharge};
