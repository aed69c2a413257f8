//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the route
//! map, holiday calendar and tariff from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{RateSchedule, RoutePoint};

use super::types::{HolidaysConfig, RateConfig, RoutesConfig, TollConfig};

const EMBEDDED_ROUTES: &str = include_str!("../../config/ring_road/routes.yaml");
const EMBEDDED_HOLIDAYS: &str = include_str!("../../config/ring_road/holidays.yaml");
const EMBEDDED_RATES: &str = include_str!("../../config/ring_road/rates.yaml");

/// Loads and provides access to toll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/ring_road/
/// ├── routes.yaml    # Toll plazas and their distance from the origin
/// ├── holidays.yaml  # Recurring national holidays
/// └── rates.yaml     # Base, distance, weekend and discount rates
/// ```
///
/// # Example
///
/// ```
/// use ring_road_toll::config::ConfigLoader;
///
/// let loader = ConfigLoader::embedded().unwrap();
/// assert_eq!(loader.list_route_points().len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ring_road")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The loaded tables are inconsistent (see [`TollConfig::new`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ring_road_toll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ring_road")?;
    /// # Ok::<(), ring_road_toll::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let routes = Self::load_yaml::<RoutesConfig>(&path.join("routes.yaml"))?;
        let holidays = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;
        let rates = Self::load_yaml::<RateConfig>(&path.join("rates.yaml"))?;

        Self::assemble(routes, holidays, rates)
    }

    /// Builds the configuration shipped inside the binary.
    ///
    /// These are the same files as `config/ring_road`, compiled in so the
    /// calculator can run without a configuration directory.
    pub fn embedded() -> EngineResult<Self> {
        let routes = Self::parse_yaml::<RoutesConfig>(EMBEDDED_ROUTES, "embedded:routes.yaml")?;
        let holidays =
            Self::parse_yaml::<HolidaysConfig>(EMBEDDED_HOLIDAYS, "embedded:holidays.yaml")?;
        let rates = Self::parse_yaml::<RateConfig>(EMBEDDED_RATES, "embedded:rates.yaml")?;

        Self::assemble(routes, holidays, rates)
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: TollConfig) -> Self {
        Self { config }
    }

    fn assemble(
        routes: RoutesConfig,
        holidays: HolidaysConfig,
        rates: RateConfig,
    ) -> EngineResult<Self> {
        let config = TollConfig::new(routes.route_points, holidays.holidays, rates)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, origin: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying toll configuration.
    pub fn config(&self) -> &TollConfig {
        &self.config
    }

    /// Gets a route point by its exact name.
    ///
    /// # Example
    ///
    /// ```
    /// use ring_road_toll::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::embedded()?;
    /// let point = loader.get_route_point("Ph4 Interchange")?;
    /// assert_eq!(point.distance_km, Decimal::new(10, 0));
    /// # Ok::<(), ring_road_toll::error::EngineError>(())
    /// ```
    pub fn get_route_point(&self, name: &str) -> EngineResult<&RoutePoint> {
        self.config.get_route_point(name)
    }

    /// Returns the route point names in distance-ascending order.
    pub fn list_route_points(&self) -> Vec<&str> {
        self.config.list_route_points()
    }

    /// Returns a descriptive snapshot of the current tariff.
    pub fn current_rate_schedule(&self) -> RateSchedule {
        self.config.current_rate_schedule()
    }
}
