//! Service configuration, read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;
use visual_core::question::DEFAULT_RELATION_TOLERANCE;

pub const ENV_HOST: &str = "GRADER_HOST";
pub const ENV_PORT: &str = "GRADER_PORT";
pub const ENV_RELATION_TOLERANCE: &str = "GRADER_RELATION_TOLERANCE";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraderConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Degrees of slack when classifying line pairs for editors.
    pub relation_tolerance: f64,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            relation_tolerance: DEFAULT_RELATION_TOLERANCE,
        }
    }
}

impl GraderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_HOST) {
            config.host = value.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                key: ENV_HOST,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }

        if let Some(value) = lookup(ENV_PORT) {
            config.port = value.parse().map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                key: ENV_PORT,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }

        if let Some(value) = lookup(ENV_RELATION_TOLERANCE) {
            let tolerance: f64 = value.parse().map_err(|e: std::num::ParseFloatError| ConfigError::InvalidValue {
                key: ENV_RELATION_TOLERANCE,
                value: value.clone(),
                reason: e.to_string(),
            })?;
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: ENV_RELATION_TOLERANCE,
                    value,
                    reason: "must be a non-negative number of degrees".into(),
                });
            }
            config.relation_tolerance = tolerance;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
