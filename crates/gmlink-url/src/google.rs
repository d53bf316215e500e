//! `comgooglemaps://` URLs for the Google Maps app.

use gmlink_core::{DirectionsRequest, MapRequest, StreetViewRequest, TravelMode, ViewOptions};

use crate::encode::{format_zoom, QueryParams};
use crate::{Definition, XCallback};

pub const GOOGLE_MAPS_SCHEME: &str = "comgooglemaps://";
pub const GOOGLE_MAPS_CALLBACK_SCHEME: &str = "comgooglemaps-x-callback://";

/// Build the Google Maps app URL for `definition`.
///
/// With `callback`, the `x-callback-url` scheme is used and `x-success` /
/// `x-source` lead the query. The caller decides whether the installed app
/// supports it.
#[must_use]
pub fn google_maps_url(definition: Definition<'_>, callback: Option<XCallback<'_>>) -> String {
    let request_params = google_params(definition);

    let mut params = QueryParams::new();
    let scheme = match callback {
        Some(callback) => {
            callback.push_params(&mut params);
            GOOGLE_MAPS_CALLBACK_SCHEME
        }
        None => GOOGLE_MAPS_SCHEME,
    };
    params.extend(request_params);

    format!("{scheme}?{params}")
}

/// Query parameters for the app, without scheme or callback.
#[must_use]
pub fn google_params(definition: Definition<'_>) -> QueryParams {
    match definition {
        Definition::Map(request) => map_params(request),
        Definition::StreetView(request) => street_view_params(request),
        Definition::Directions(request) => directions_params(request),
    }
}

fn map_params(request: &MapRequest) -> QueryParams {
    let mut params = QueryParams::new();
    params.push_coordinate("center", request.valid_center());

    if let Some(views) = view_list(request.view_options) {
        params.push("views", views);
    }
    if let Some(zoom) = request.zoom() {
        params.push("zoom", format_zoom(zoom));
    }
    if let Some(query) = request.query() {
        params.push_text("q", query);
    }
    params
}

fn street_view_params(request: &StreetViewRequest) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_coordinate("center", Some(request.center))
        .push("mapmode", "streetview");
    params
}

fn directions_params(request: &DirectionsRequest) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_waypoint("saddr", request.start.as_ref())
        .push_waypoint("daddr", request.destination.as_ref())
        .push("directionsmode", directions_mode(request.travel_mode));
    params
}

/// Comma-joined layer list in fixed order, or `None` when no layer is
/// requested.
fn view_list(options: ViewOptions) -> Option<String> {
    let names: Vec<&str> = options.layer_names().collect();

    if names.is_empty() {
        None
    } else {
        Some(names.join(","))
    }
}

const fn directions_mode(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving => "driving",
        TravelMode::Transit => "transit",
        TravelMode::Biking => "bicycling",
        TravelMode::Walking => "walking",
    }
}

#[cfg(test)]
#[path = "google_test.rs"]
mod tests;
