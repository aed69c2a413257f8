//! Core data models for the Ring Road Toll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod rate_schedule;
mod route_point;
mod toll_request;
mod toll_result;

pub use holiday::{MonthDay, NationalHoliday, ParseMonthDayError};
pub use rate_schedule::RateSchedule;
pub use route_point::RoutePoint;
pub use toll_request::TollRequest;
pub use toll_result::{TollBreakdown, TollResult};
