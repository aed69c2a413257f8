//! Toll fare engine for the Lahore Ring Road
//!
//! This crate prices trips between interchanges on the ring road using a
//! distance-based tariff, a weekend surcharge, and stacked national holiday
//! and number plate discounts. It also ships the HTTP API that serves it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
