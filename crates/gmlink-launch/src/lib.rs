//! Opens request definitions in Google Maps, walking the configured fallback
//! strategy when the app is not installed.

pub mod launcher;
pub mod resolver;

pub use gmlink_core::{
    Coordinate, DirectionsRequest, FallbackStrategy, MapRequest, ResolverConfig,
    StreetViewRequest, TravelMode, ViewOptions, Waypoint,
};
pub use launcher::AppLauncher;
pub use resolver::LaunchResolver;
pub use url::Url;
