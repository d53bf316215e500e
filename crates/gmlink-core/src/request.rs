//! Request definitions: what to show once Google Maps (or a fallback) opens.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Coordinate, ParseEnumError};

/// Google Maps clamps zoom levels to this upper bound.
pub const MAX_ZOOM: f32 = 21.0;

bitflags! {
    /// Optional map layers to toggle on.
    ///
    /// Serialized as a list of layer names, e.g. `[satellite, traffic]`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ViewOptions: u8 {
        const SATELLITE = 1 << 0;
        const TRAFFIC = 1 << 1;
        const TRANSIT = 1 << 2;
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::empty()
    }
}

impl ViewOptions {
    /// Every layer with its name, in the order URLs list them.
    pub const LAYERS: [(ViewOptions, &'static str); 3] = [
        (ViewOptions::SATELLITE, "satellite"),
        (ViewOptions::TRAFFIC, "traffic"),
        (ViewOptions::TRANSIT, "transit"),
    ];

    /// Names of the set layers, in `LAYERS` order.
    pub fn layer_names(self) -> impl Iterator<Item = &'static str> {
        Self::LAYERS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

/// Parses a single layer name, case-insensitively.
impl std::str::FromStr for ViewOptions {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::LAYERS
            .into_iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(needle))
            .map(|(flag, _)| flag)
            .ok_or_else(|| ParseEnumError {
                kind: "view option",
                value: s.to_string(),
                expected: "satellite, traffic, transit",
            })
    }
}

impl Serialize for ViewOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.layer_names())
    }
}

impl<'de> Deserialize<'de> for ViewOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names.iter().try_fold(Self::empty(), |acc, name| {
            name.parse::<ViewOptions>()
                .map(|layer| acc | layer)
                .map_err(serde::de::Error::custom)
        })
    }
}

/// A map to open, centred on a coordinate and/or searching for a query.
///
/// Either `query_string` or `center` should be set. Neither is enforced: with
/// both absent the builders still produce a valid, if useless, URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapRequest {
    pub query_string: Option<String>,
    /// When set together with `query_string`, the search is centred here.
    pub center: Option<Coordinate>,
    pub view_options: ViewOptions,
    /// `0.0` (or anything non-positive) leaves the zoom up to the target app.
    pub zoom_level: f32,
}

impl MapRequest {
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query_string: Some(query.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_center(center: Coordinate) -> Self {
        Self {
            center: Some(center),
            ..Self::default()
        }
    }

    /// The query string, if it holds anything besides whitespace.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        non_blank(self.query_string.as_deref())
    }

    /// The center, if it is a valid coordinate.
    #[must_use]
    pub fn valid_center(&self) -> Option<Coordinate> {
        self.center.filter(Coordinate::is_valid)
    }

    /// The zoom level clamped to `0.0..=MAX_ZOOM`, or `None` when it should
    /// not be emitted at all.
    #[must_use]
    pub fn zoom(&self) -> Option<f32> {
        if self.zoom_level.is_finite() && self.zoom_level > 0.0 {
            Some(self.zoom_level.min(MAX_ZOOM))
        } else {
            None
        }
    }
}

/// A Street View location. The coordinate is the only way to define one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreetViewRequest {
    pub center: Coordinate,
}

impl StreetViewRequest {
    #[must_use]
    pub const fn new(center: Coordinate) -> Self {
        Self { center }
    }
}

/// One end of a directions request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waypoint {
    /// Free-text search, e.g. `"4 Main Street, Anytown USA"`.
    Query(String),
    Location(Coordinate),
}

impl Waypoint {
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self::Query(query.into())
    }

    #[must_use]
    pub const fn location(location: Coordinate) -> Self {
        Self::Location(location)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Driving,
    Transit,
    Biking,
    Walking,
}

impl TravelMode {
    /// Every mode, in declaration order.
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Driving,
        TravelMode::Transit,
        TravelMode::Biking,
        TravelMode::Walking,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Transit => "transit",
            TravelMode::Biking => "biking",
            TravelMode::Walking => "walking",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "travel mode",
                value: s.to_string(),
                expected: "driving, transit, biking, walking",
            })
    }
}

/// Point-to-point directions.
///
/// An absent waypoint means "the user's current location". Leaving both
/// absent is accepted here; the target app is what rejects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionsRequest {
    pub start: Option<Waypoint>,
    pub destination: Option<Waypoint>,
    pub travel_mode: TravelMode,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;
