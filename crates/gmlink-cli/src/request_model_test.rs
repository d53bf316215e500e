use gmlink_core::{Coordinate, TravelMode, ViewOptions, Waypoint};

use super::*;

fn sf() -> Coordinate {
    Coordinate::new(37.757_969_1, -122.388_066_7)
}

#[test]
fn new_model_describes_groups_as_not_set() {
    let model = MapRequestModel::new();
    assert_eq!(model.description_for_group(LocationGroup::Start), "Not set");
    assert_eq!(model.description_for_group(LocationGroup::End), "Not set");
}

#[test]
fn query_description() {
    let mut model = MapRequestModel::new();
    model.set_query_string("4 Main Street, Anytown USA", LocationGroup::Start);
    assert_eq!(
        model.description_for_group(LocationGroup::Start),
        "4 Main Street, Anytown USA"
    );
}

#[test]
fn query_near_location_description() {
    let mut model = MapRequestModel::new();
    model.set_query_string_with_center(Some("Ice cream".to_string()), sf(), LocationGroup::End);
    assert_eq!(
        model.description_for_group(LocationGroup::End),
        "Ice cream near 37.757969, -122.388067"
    );
}

#[test]
fn current_location_description() {
    let mut model = MapRequestModel::new();
    model.use_current_location(LocationGroup::Start);
    assert_eq!(
        model.description_for_group(LocationGroup::Start),
        "Current location"
    );
}

#[test]
fn setting_query_clears_current_location() {
    let mut model = MapRequestModel::new();
    model.use_current_location(LocationGroup::Start);
    model.set_query_string("Ferry Building", LocationGroup::Start);
    assert_eq!(
        model.directions_request().start,
        Some(Waypoint::query("Ferry Building"))
    );
}

#[test]
fn travel_mode_descriptions_are_sorted_by_mode() {
    assert_eq!(
        MapRequestModel::sorted_travel_mode_descriptions(),
        vec!["Driving", "Public transit", "Bicycling", "Walking"]
    );
}

#[test]
fn travel_mode_description_follows_mode() {
    let mut model = MapRequestModel::new();
    assert_eq!(model.travel_mode_description(), "Driving");
    model.travel_mode = TravelMode::Biking;
    assert_eq!(model.travel_mode_description(), "Bicycling");
}

#[test]
fn directions_prefer_location_over_query() {
    let mut model = MapRequestModel::new();
    model.set_query_string_with_center(Some("Ice cream".to_string()), sf(), LocationGroup::End);
    let request = model.directions_request();
    assert_eq!(request.destination, Some(Waypoint::location(sf())));
}

#[test]
fn directions_map_current_location_to_absent_waypoint() {
    let mut model = MapRequestModel::new();
    model.use_current_location(LocationGroup::Start);
    model.set_query_string("Golden Gate Bridge", LocationGroup::End);
    model.travel_mode = TravelMode::Walking;

    let request = model.directions_request();
    assert!(request.start.is_none());
    assert_eq!(
        request.destination,
        Some(Waypoint::query("Golden Gate Bridge"))
    );
    assert_eq!(request.travel_mode, TravelMode::Walking);
}

#[test]
fn map_request_uses_start_group() {
    let mut model = MapRequestModel::new();
    model.set_query_string_with_center(Some("Ice cream".to_string()), sf(), LocationGroup::Start);
    model.set_query_string("ignored", LocationGroup::End);

    let request = model.map_request(ViewOptions::SATELLITE, 12.0);
    assert_eq!(request.query_string.as_deref(), Some("Ice cream"));
    assert_eq!(request.center, Some(sf()));
    assert_eq!(request.view_options, ViewOptions::SATELLITE);
    assert!((request.zoom_level - 12.0).abs() < f32::EPSILON);
}

#[test]
fn street_view_requires_start_location() {
    let mut model = MapRequestModel::new();
    model.set_query_string("Eiffel Tower", LocationGroup::Start);
    assert!(model.street_view_request().is_none());

    model.set_query_string_with_center(None, sf(), LocationGroup::Start);
    assert_eq!(
        model.street_view_request(),
        Some(StreetViewRequest::new(sf()))
    );
}

#[test]
fn from_parts_classifies_picker_input() {
    assert_eq!(
        PickedLocation::from_parts(Some("x".to_string()), Some(sf()), true),
        PickedLocation::CurrentLocation
    );
    assert_eq!(
        PickedLocation::from_parts(Some("x".to_string()), Some(sf()), false),
        PickedLocation::QueryAndLocation {
            query: "x".to_string(),
            location: sf()
        }
    );
    assert_eq!(
        PickedLocation::from_parts(Some("x".to_string()), None, false),
        PickedLocation::QueryOnly("x".to_string())
    );
    assert_eq!(
        PickedLocation::from_parts(None, Some(sf()), false),
        PickedLocation::LocationOnly(sf())
    );
    assert_eq!(
        PickedLocation::from_parts(Some("  ".to_string()), None, false),
        PickedLocation::NonePicked
    );
}

#[test]
fn apply_pick_sets_group() {
    let mut model = MapRequestModel::new();
    let changed = model.apply_pick(
        LocationGroup::End,
        PickedLocation::QueryOnly("SFO".to_string()),
        true,
    );
    assert!(changed);
    assert_eq!(model.description_for_group(LocationGroup::End), "SFO");
}

#[test]
fn apply_pick_none_leaves_model_unchanged() {
    let mut model = MapRequestModel::new();
    model.set_query_string("SFO", LocationGroup::End);
    let before = model.clone();
    assert!(!model.apply_pick(LocationGroup::End, PickedLocation::NonePicked, true));
    assert_eq!(model, before);
}

#[test]
fn apply_pick_ignores_current_location_when_not_allowed() {
    let mut model = MapRequestModel::new();
    model.set_query_string("Pier 39", LocationGroup::Start);
    assert!(!model.apply_pick(LocationGroup::Start, PickedLocation::CurrentLocation, false));
    assert_eq!(model.description_for_group(LocationGroup::Start), "Pier 39");

    assert!(model.apply_pick(LocationGroup::Start, PickedLocation::CurrentLocation, true));
    assert_eq!(
        model.description_for_group(LocationGroup::Start),
        "Current location"
    );
}
