//! Server settings read from the environment.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

use super::ConfigLoader;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Address bound when `HOST` is not set.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// HTTP server settings.
///
/// | Variable          | Default   | Meaning                                  |
/// |-------------------|-----------|------------------------------------------|
/// | `HOST`            | `0.0.0.0` | Address to bind                          |
/// | `PORT`            | `3000`    | Port to bind                             |
/// | `TOLL_CONFIG_DIR` | unset     | Reference data directory; embedded if unset |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
    /// Directory holding `routes.yaml`, `holidays.yaml` and `rates.yaml`.
    pub config_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            config_dir: None,
        }
    }
}

impl ServerConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("HOST") {
            config.host = raw.trim().parse().map_err(|_| EngineError::InvalidConfig {
                message: format!("HOST must be an IP address, got '{}'", raw),
            })?;
        }

        if let Some(raw) = lookup("PORT") {
            config.port = raw.trim().parse().map_err(|_| EngineError::InvalidConfig {
                message: format!("PORT must be a number between 0 and 65535, got '{}'", raw),
            })?;
        }

        config.config_dir = lookup("TOLL_CONFIG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Returns the socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Loads the reference tables from `config_dir`, or the embedded copy.
    pub fn load_tables(&self) -> EngineResult<ConfigLoader> {
        match &self.config_dir {
            Some(dir) => ConfigLoader::load(dir),
            None => ConfigLoader::embedded(),
        }
    }
}
