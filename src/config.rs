//! Configuration loaded from environment variables.
//!
//! Unset variables fall back to defaults; set variables must parse and be
//! positive, or startup fails.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_CHANNEL_CAPACITY: usize = 32;
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime configuration for the order system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Capacity of each actor's request channel.
    pub channel_capacity: usize,
    /// Page size applied when a listing query does not specify one.
    pub default_page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            channel_capacity: read_var("ORDERS_CHANNEL_CAPACITY", DEFAULT_CHANNEL_CAPACITY)?,
            default_page_size: read_var("ORDERS_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
        })
    }
}

fn read_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    match env::var(name) {
        Ok(raw) => {
            let parsed = raw
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidValue { name, value: raw.clone() })?;
            if parsed < T::from(1u8) {
                return Err(ConfigError::InvalidValue { name, value: raw });
            }
            Ok(parsed)
        }
        Err(_) => Ok(default),
    }
}
