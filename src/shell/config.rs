// Runtime configuration for the binary, read from the process environment.
//
// The binary loads a `.env` file into the environment before calling `from_env`.

use crate::modules::events::use_cases::record_event::latency::LatencyPolicy;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

pub const HOST_VAR: &str = "EVENTS_API_HOST";
pub const PORT_VAR: &str = "EVENTS_API_PORT";
pub const SIMULATE_LATENCY_VAR: &str = "EVENTS_API_SIMULATE_LATENCY";

const DEFAULT_HOST: IpAddr = IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 9035;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an IP address, got {value:?}")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub latency: LatencyPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            latency: LatencyPolicy::Disabled,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source, so tests need not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            config.host = value.trim().parse().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value,
            })?;
        }
        if let Some(value) = lookup(PORT_VAR) {
            config.port = value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?;
        }
        if let Some(value) = lookup(SIMULATE_LATENCY_VAR) {
            config.latency = if parse_flag(SIMULATE_LATENCY_VAR, &value)? {
                LatencyPolicy::ByIdentifier
            } else {
                LatencyPolicy::Disabled
            };
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
