//! Request definitions and resolver configuration for deep-linking into
//! Google Maps.
//!
//! The types here are plain values: the URL builders in `gmlink-url` only read
//! them, and the resolver in `gmlink-launch` never mutates or persists them.

pub mod app_config;
pub mod config;
pub mod coordinate;
pub mod request;

use thiserror::Error;

pub use app_config::{AppConfig, FallbackStrategy, ResolverConfig, DEFAULT_APP_NAME};
pub use config::{load_app_config, load_app_config_from_env, parse_callback_url};
pub use coordinate::Coordinate;
pub use request::{
    DirectionsRequest, MapRequest, StreetViewRequest, TravelMode, ViewOptions, Waypoint, MAX_ZOOM,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Returned when a string names none of the variants of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} \"{value}\" (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
