//! # Tracker Configuration
//!
//! Knobs for the registry and the actor host. Defaults reproduce the classic behavior:
//! a five day delivery window and ids of the form `ORD-10001`.
//!
//! Values can be overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `SHIPPING_DELIVERY_DAYS` | `delivery_window_days` |
//! | `SHIPPING_ID_PREFIX` | `id_prefix` |
//! | `SHIPPING_ID_START` | `id_start` |
//! | `SHIPPING_CHANNEL_CAPACITY` | `channel_capacity` |
//!
//! Every way of building a config ends in [`TrackerConfig::validate`], including serde
//! deserialization.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Longest delivery window accepted, in days.
pub const MAX_DELIVERY_WINDOW_DAYS: i64 = 3650;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrackerConfig")]
pub struct TrackerConfig {
    /// Days between the order date and the estimated delivery.
    pub delivery_window_days: i64,
    pub id_prefix: String,
    pub id_start: u64,
    /// Capacity of the actor's request channel.
    pub channel_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            delivery_window_days: 5,
            id_prefix: "ORD-".to_string(),
            id_start: 10001,
            channel_capacity: 32,
        }
    }
}

// Unchecked shape of the serialized config; converted through `validate`.
#[derive(Deserialize)]
#[serde(default)]
struct RawTrackerConfig {
    delivery_window_days: i64,
    id_prefix: String,
    id_start: u64,
    channel_capacity: usize,
}

impl Default for RawTrackerConfig {
    fn default() -> Self {
        let TrackerConfig {
            delivery_window_days,
            id_prefix,
            id_start,
            channel_capacity,
        } = TrackerConfig::default();
        Self {
            delivery_window_days,
            id_prefix,
            id_start,
            channel_capacity,
        }
    }
}

impl TryFrom<RawTrackerConfig> for TrackerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawTrackerConfig) -> Result<Self, Self::Error> {
        let config = Self {
            delivery_window_days: raw.delivery_window_days,
            id_prefix: raw.id_prefix,
            id_start: raw.id_start,
            channel_capacity: raw.channel_capacity,
        };
        config.validate()?;
        Ok(config)
    }
}

impl TrackerConfig {
    /// The window as a duration, clamped to `0..=MAX_DELIVERY_WINDOW_DAYS` for configs
    /// built by hand without [`validate`](Self::validate).
    pub fn delivery_window(&self) -> Duration {
        Duration::days(self.delivery_window_days.clamp(0, MAX_DELIVERY_WINDOW_DAYS))
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("SHIPPING_DELIVERY_DAYS") {
            config.delivery_window_days = value
                .trim()
                .parse()
                .map_err(|_| invalid("SHIPPING_DELIVERY_DAYS", value.clone(), WINDOW_RANGE))?;
        }
        if let Some(value) = lookup("SHIPPING_ID_PREFIX") {
            config.id_prefix = value;
        }
        if let Some(value) = lookup("SHIPPING_ID_START") {
            config.id_start = value
                .trim()
                .parse()
                .map_err(|_| invalid("SHIPPING_ID_START", value.clone(), "an unsigned integer"))?;
        }
        if let Some(value) = lookup("SHIPPING_CHANNEL_CAPACITY") {
            config.channel_capacity = value
                .trim()
                .parse()
                .map_err(|_| invalid("SHIPPING_CHANNEL_CAPACITY", value.clone(), CAPACITY_RANGE))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks that the values cannot break the registry or the actor host: the delivery
    /// window must fit in `0..=MAX_DELIVERY_WINDOW_DAYS` and the channel needs room for
    /// at least one request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_DELIVERY_WINDOW_DAYS).contains(&self.delivery_window_days) {
            return Err(invalid(
                "SHIPPING_DELIVERY_DAYS",
                self.delivery_window_days.to_string(),
                WINDOW_RANGE,
            ));
        }
        if self.channel_capacity == 0 {
            return Err(invalid(
                "SHIPPING_CHANNEL_CAPACITY",
                self.channel_capacity.to_string(),
                CAPACITY_RANGE,
            ));
        }
        Ok(())
    }
}

const WINDOW_RANGE: &str = "an integer between 0 and 3650";
const CAPACITY_RANGE: &str = "a positive integer";

fn invalid(key: &'static str, value: String, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value,
        expected,
    }
}
