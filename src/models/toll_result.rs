//! Toll result models.
//!
//! This module contains the [`TollResult`] returned by the calculator and
//! its [`TollBreakdown`]. Field names serialize in camelCase and amounts
//! serialize as JSON numbers, which is what existing toll clients read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The priced fare for a single trip.
///
/// Monetary fields are rounded to two decimal places. `distance_km` is
/// exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TollResult {
    /// The amount the vehicle pays.
    #[serde(with = "rust_decimal::serde::float")]
    pub toll_amount: Decimal,
    /// The flat per-trip charge.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_toll: Decimal,
    /// The distance charge after any weekend multiplier.
    #[serde(with = "rust_decimal::serde::float")]
    pub distance_toll: Decimal,
    /// Kilometres between the entry and exit plazas.
    #[serde(with = "rust_decimal::serde::float")]
    pub distance_km: Decimal,
    /// Sum of the individually rounded holiday and number plate discounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_applied: Decimal,
    /// Human-readable reasons, in the order the discounts were applied.
    #[serde(rename = "discountReason")]
    pub discount_reasons: Vec<String>,
    /// Step-by-step breakdown of the fare.
    pub breakdown: TollBreakdown,
}

/// Breakdown of how a fare was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TollBreakdown {
    /// The flat per-trip charge.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_rate: Decimal,
    /// The distance charge before the weekend multiplier.
    #[serde(with = "rust_decimal::serde::float")]
    pub distance_rate: Decimal,
    /// 1 on weekdays, the weekend multiplier on Saturday and Sunday exits.
    #[serde(with = "rust_decimal::serde::float")]
    pub weekend_multiplier: Decimal,
    /// Amount taken off by the number plate rule.
    #[serde(with = "rust_decimal::serde::float")]
    pub number_plate_discount: Decimal,
    /// Amount taken off by the national holiday rule.
    #[serde(with = "rust_decimal::serde::float")]
    pub holiday_discount: Decimal,
    /// The fare after all discounts; equal to `toll_amount`.
    #[serde(with = "rust_decimal::serde::float")]
    pub final_amount: Decimal,
}

impl TollResult {
    /// Returns true if any discount reduced the fare.
    pub fn is_discounted(&self) -> bool {
        !self.discount_reasons.is_empty()
    }
}
