//! Apple Maps URLs, the native fallback.
//!
//! Apple Maps has no traffic or transit layer toggle, no Street View and only
//! driving and walking directions. Anything without an analogue is dropped
//! or, for travel modes, falls back to driving.

use gmlink_core::{DirectionsRequest, MapRequest, StreetViewRequest, TravelMode, ViewOptions};

use crate::encode::{format_zoom, QueryParams};
use crate::Definition;

pub const APPLE_MAPS_BASE: &str = "http://maps.apple.com/";

#[must_use]
pub fn apple_maps_url(definition: Definition<'_>) -> String {
    let params = match definition {
        Definition::Map(request) => map_params(request),
        Definition::StreetView(request) => street_view_params(request),
        Definition::Directions(request) => directions_params(request),
    };
    format!("{APPLE_MAPS_BASE}?{params}")
}

fn map_params(request: &MapRequest) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(query) = request.query() {
        params.push_text("q", query);
    }
    params.push_coordinate("ll", request.valid_center());
    if let Some(zoom) = request.zoom() {
        params.push("z", format_zoom(zoom));
    }
    if request.view_options.contains(ViewOptions::SATELLITE) {
        params.push("t", "k");
    }
    params
}

// Closest thing to Street View: the satellite map at that spot.
fn street_view_params(request: &StreetViewRequest) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_coordinate("ll", Some(request.center))
        .push("t", "k");
    params
}

fn directions_params(request: &DirectionsRequest) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_waypoint("saddr", request.start.as_ref())
        .push_waypoint("daddr", request.destination.as_ref())
        .push("dirflg", direction_flag(request.travel_mode));
    params
}

const fn direction_flag(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Walking => "w",
        TravelMode::Driving | TravelMode::Transit | TravelMode::Biking => "d",
    }
}

#[cfg(test)]
mod tests {
    use gmlink_core::{Coordinate, Waypoint};

    use super::*;

    #[test]
    fn map_keeps_satellite_and_drops_other_layers() {
        let request = MapRequest {
            query_string: Some("Pier 39".to_string()),
            center: Some(Coordinate::new(37.808_674, -122.409_821)),
            view_options: ViewOptions::SATELLITE | ViewOptions::TRAFFIC | ViewOptions::TRANSIT,
            zoom_level: 15.5,
        };
        assert_eq!(
            apple_maps_url(Definition::Map(&request)),
            "http://maps.apple.com/?q=Pier%2039&ll=37.808674,-122.409821&z=15.5&t=k"
        );
    }

    #[test]
    fn street_view_shows_satellite_map() {
        let request = StreetViewRequest::new(Coordinate::new(10.0, 20.0));
        assert_eq!(
            apple_maps_url(Definition::StreetView(&request)),
            "http://maps.apple.com/?ll=10.000000,20.000000&t=k"
        );
    }

    #[test]
    fn walking_directions_keep_mode() {
        let request = DirectionsRequest {
            start: None,
            destination: Some(Waypoint::query("Coit Tower")),
            travel_mode: TravelMode::Walking,
        };
        assert_eq!(
            apple_maps_url(Definition::Directions(&request)),
            "http://maps.apple.com/?daddr=Coit%20Tower&dirflg=w"
        );
    }

    #[test]
    fn modes_without_equivalent_default_to_driving() {
        for travel_mode in [TravelMode::Transit, TravelMode::Biking, TravelMode::Driving] {
            let request = DirectionsRequest {
                travel_mode,
                ..DirectionsRequest::default()
            };
            assert_eq!(
                apple_maps_url(Definition::Directions(&request)),
                "http://maps.apple.com/?dirflg=d"
            );
        }
    }
}
