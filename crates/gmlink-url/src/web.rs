//! Google Maps website URLs, opened either in the default browser or in
//! Chrome.

use gmlink_core::{DirectionsRequest, MapRequest, StreetViewRequest, TravelMode, ViewOptions};

use crate::encode::{format_zoom, QueryParams};
use crate::{Definition, XCallback};

pub const GOOGLE_MAPS_WEB_BASE: &str = "https://maps.google.com/maps";

pub const CHROME_SCHEME: &str = "googlechrome://";
pub const CHROME_HTTPS_SCHEME: &str = "googlechromes://";
pub const CHROME_CALLBACK_SCHEME: &str = "googlechrome-x-callback://";

/// Build the `https://maps.google.com/maps?...` URL for `definition`.
///
/// The website takes a reduced parameter set: the transit layer has no
/// equivalent and is dropped.
#[must_use]
pub fn web_url(definition: Definition<'_>) -> String {
    let params = match definition {
        Definition::Map(request) => map_params(request),
        Definition::StreetView(request) => street_view_params(request),
        Definition::Directions(request) => directions_params(request),
    };
    format!("{GOOGLE_MAPS_WEB_BASE}?{params}")
}

/// Build a URL that opens the Google Maps website in Chrome.
///
/// With `callback`, Chrome's `x-callback-url` endpoint is used so Chrome can
/// offer a way back. Otherwise the web URL's scheme is swapped for Chrome's.
#[must_use]
pub fn chrome_url(definition: Definition<'_>, callback: Option<XCallback<'_>>) -> String {
    let web = web_url(definition);

    match callback {
        Some(callback) => {
            let mut params = QueryParams::new();
            params.push_text("url", &web);
            callback.push_params(&mut params);
            format!("{CHROME_CALLBACK_SCHEME}x-callback-url/open/?{params}")
        }
        None => to_chrome_scheme(&web),
    }
}

fn to_chrome_scheme(web: &str) -> String {
    if let Some(rest) = web.strip_prefix("https://") {
        format!("{CHROME_HTTPS_SCHEME}{rest}")
    } else if let Some(rest) = web.strip_prefix("http://") {
        format!("{CHROME_SCHEME}{rest}")
    } else {
        web.to_string()
    }
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
    if request.view_options.contains(ViewOptions::TRAFFIC) {
        params.push("layer", "t");
    }
    params
}

fn street_view_params(request: &StreetViewRequest) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push("layer", "c")
        .push_coordinate("cbll", Some(request.center));
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
        TravelMode::Driving => "d",
        TravelMode::Transit => "r",
        TravelMode::Biking => "b",
        TravelMode::Walking => "w",
    }
}

#[cfg(test)]
#[path = "web_test.rs"]
mod tests;
