//! Percent-encoding and number formatting shared by every builder.

use gmlink_core::{Coordinate, Waypoint};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a free-text value for use inside a query component.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// Format degrees with the shortest representation that round-trips, padded
/// to at least six decimal digits.
#[must_use]
pub fn format_degrees(value: f64) -> String {
    let shortest = value.to_string();
    let decimals = shortest.split_once('.').map_or(0, |(_, frac)| frac.len());
    if decimals >= 6 {
        shortest
    } else {
        format!("{value:.6}")
    }
}

/// `lat,lon`, the form every maps URL scheme here expects.
#[must_use]
pub fn format_coordinate(coordinate: Coordinate) -> String {
    format!(
        "{},{}",
        format_degrees(coordinate.latitude),
        format_degrees(coordinate.longitude)
    )
}

#[must_use]
pub fn format_zoom(zoom: f32) -> String {
    zoom.to_string()
}

/// Ordered `key=value` pairs. Values are stored already URL-safe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value that needs no encoding (numbers, fixed keywords).
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key, value.into()));
        self
    }

    /// Append free text, percent-encoding it.
    pub fn push_text(&mut self, key: &'static str, value: &str) -> &mut Self {
        self.push(key, encode_component(value))
    }

    /// Append a coordinate, skipping it when it is invalid.
    pub fn push_coordinate(
        &mut self,
        key: &'static str,
        coordinate: Option<Coordinate>,
    ) -> &mut Self {
        if let Some(coordinate) = coordinate.filter(Coordinate::is_valid) {
            self.push(key, format_coordinate(coordinate));
        }
        self
    }

    /// Append a directions endpoint. An absent waypoint, a blank query or an
    /// invalid coordinate leaves the key out, which the target app reads as
    /// "current location".
    pub fn push_waypoint(
        &mut self,
        key: &'static str,
        waypoint: Option<&Waypoint>,
    ) -> &mut Self {
        match waypoint {
            Some(Waypoint::Query(query)) if !query.trim().is_empty() => self.push_text(key, query),
            Some(Waypoint::Location(location)) => self.push_coordinate(key, Some(*location)),
            _ => self,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value stored under `key`, still encoded.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn extend(&mut self, other: QueryParams) -> &mut Self {
        self.pairs.extend(other.pairs);
        self
    }
}

impl std::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "encode_test.rs"]
mod tests;
