//! Configuration loading and management for the Ring Road Toll Engine.
//!
//! This module loads the static reference tables (route map, holiday
//! calendar, tariff) from YAML and reads server settings from the
//! environment.
//!
//! # Example
//!
//! ```
//! use ring_road_toll::config::ConfigLoader;
//!
//! let config = ConfigLoader::embedded().unwrap();
//! println!("Known plazas: {:?}", config.list_route_points());
//! ```

mod loader;
mod server;
mod types;

pub use loader::ConfigLoader;
pub use server::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
pub use types::{HolidaysConfig, RateConfig, RoutesConfig, TollConfig};
