use gmlink_core::{Coordinate, ResolverConfig, Waypoint};
use url::Url;

use super::*;

#[test]
fn map_web_url_uses_web_parameters() {
    let request = MapRequest {
        query_string: Some("Coffee".to_string()),
        center: Some(Coordinate::new(51.5, -0.125)),
        view_options: ViewOptions::all(),
        zoom_level: 12.0,
    };
    assert_eq!(
        web_url(Definition::Map(&request)),
        "https://maps.google.com/maps?q=Coffee&ll=51.500000,-0.125000&z=12&t=k&layer=t"
    );
}

#[test]
fn street_view_web_url_uses_cbll() {
    let request = StreetViewRequest::new(Coordinate::new(48.858_37, 2.294_481));
    assert_eq!(
        web_url(Definition::StreetView(&request)),
        "https://maps.google.com/maps?layer=c&cbll=48.858370,2.294481"
    );
}

#[test]
fn directions_web_url_maps_every_mode() {
    let cases = [
        (TravelMode::Driving, "d"),
        (TravelMode::Transit, "r"),
        (TravelMode::Biking, "b"),
        (TravelMode::Walking, "w"),
    ];
    for (travel_mode, flag) in cases {
        let request = DirectionsRequest {
            start: Some(Waypoint::query("A")),
            destination: Some(Waypoint::query("B")),
            travel_mode,
        };
        assert_eq!(
            web_url(Definition::Directions(&request)),
            format!("https://maps.google.com/maps?saddr=A&daddr=B&dirflg={flag}")
        );
    }
}

#[test]
fn chrome_url_swaps_https_scheme() {
    let request = MapRequest::with_query("Ferry Building");
    assert_eq!(
        chrome_url(Definition::Map(&request), None),
        "googlechromes://maps.google.com/maps?q=Ferry%20Building"
    );
}

#[test]
fn to_chrome_scheme_handles_plain_http() {
    assert_eq!(
        to_chrome_scheme("http://example.com/x"),
        "googlechrome://example.com/x"
    );
}

#[test]
fn chrome_callback_url_wraps_web_url() {
    let config = ResolverConfig {
        callback_url: Some(Url::parse("sampleapp://back").unwrap()),
        app_name: "Sample".to_string(),
        ..ResolverConfig::default()
    };
    let request = MapRequest::with_query("Ferry Building");
    let url = chrome_url(
        Definition::Map(&request),
        crate::XCallback::from_config(&config),
    );

    assert!(url.starts_with("googlechrome-x-callback://x-callback-url/open/?url="));
    let parsed = Url::parse(&url).unwrap();
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (
                "url".to_string(),
                "https://maps.google.com/maps?q=Ferry%20Building".to_string()
            ),
            ("x-success".to_string(), "sampleapp://back".to_string()),
            ("x-source".to_string(), "Sample".to_string()),
        ]
    );
}
