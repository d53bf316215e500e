//! What the user has picked so far: a start (and, for directions, a
//! destination) plus a travel mode.
//!
//! Kept separate from the `gmlink-core` definitions on purpose; the model is
//! converted into one of them only when a request is opened.

use gmlink_core::{
    Coordinate, DirectionsRequest, MapRequest, StreetViewRequest, TravelMode, ViewOptions,
    Waypoint,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationGroup {
    Start,
    End,
}

/// The outcome of picking a location for one group.
#[derive(Debug, Clone, PartialEq)]
pub enum PickedLocation {
    /// A search string only, e.g. `"425 Main Street"`.
    QueryOnly(String),
    LocationOnly(Coordinate),
    /// e.g. `"Ice cream"` near a coordinate.
    QueryAndLocation { query: String, location: Coordinate },
    CurrentLocation,
    /// Leave the group unchanged.
    NonePicked,
}

impl PickedLocation {
    /// Classify raw picker input. "Use current location" wins over anything
    /// typed; a blank query counts as no query.
    #[must_use]
    pub fn from_parts(
        query: Option<String>,
        location: Option<Coordinate>,
        current: bool,
    ) -> Self {
        if current {
            return PickedLocation::CurrentLocation;
        }
        let query = query.filter(|q| !q.trim().is_empty());
        match (query, location) {
            (Some(query), Some(location)) => PickedLocation::QueryAndLocation { query, location },
            (Some(query), None) => PickedLocation::QueryOnly(query),
            (None, Some(location)) => PickedLocation::LocationOnly(location),
            (None, None) => PickedLocation::NonePicked,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct GroupState {
    query: Option<String>,
    location: Option<Coordinate>,
    current_location: bool,
}

impl GroupState {
    fn description(&self) -> String {
        if self.current_location {
            return "Current location".to_string();
        }
        match (&self.query, self.location) {
            (Some(query), Some(location)) => format!("{query} near {location}"),
            (Some(query), None) => query.clone(),
            (None, Some(location)) => location.to_string(),
            (None, None) => "Not set".to_string(),
        }
    }

    /// Location wins over query; current location is an absent waypoint.
    fn waypoint(&self) -> Option<Waypoint> {
        if self.current_location {
            return None;
        }
        match (&self.query, self.location) {
            (_, Some(location)) => Some(Waypoint::Location(location)),
            (Some(query), None) => Some(Waypoint::Query(query.clone())),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapRequestModel {
    start: GroupState,
    destination: GroupState,
    pub travel_mode: TravelMode,
}

impl MapRequestModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set only the text search for a group.
    pub fn set_query_string(&mut self, query: impl Into<String>, group: LocationGroup) {
        *self.group_mut(group) = GroupState {
            query: Some(query.into()),
            ..GroupState::default()
        };
    }

    /// Set a coordinate with an optional text search around it.
    pub fn set_query_string_with_center(
        &mut self,
        query: Option<String>,
        center: Coordinate,
        group: LocationGroup,
    ) {
        *self.group_mut(group) = GroupState {
            query,
            location: Some(center),
            current_location: false,
        };
    }

    pub fn use_current_location(&mut self, group: LocationGroup) {
        *self.group_mut(group) = GroupState {
            current_location: true,
            ..GroupState::default()
        };
    }

    /// Apply a picker result. Current location is only accepted when the
    /// picker allowed it (directions only). Returns whether the model changed.
    pub fn apply_pick(
        &mut self,
        group: LocationGroup,
        picked: PickedLocation,
        allow_current_location: bool,
    ) -> bool {
        match picked {
            PickedLocation::QueryOnly(query) => self.set_query_string(query, group),
            PickedLocation::LocationOnly(location) => {
                self.set_query_string_with_center(None, location, group);
            }
            PickedLocation::QueryAndLocation { query, location } => {
                self.set_query_string_with_center(Some(query), location, group);
            }
            PickedLocation::CurrentLocation if allow_current_location => {
                self.use_current_location(group);
            }
            PickedLocation::CurrentLocation | PickedLocation::NonePicked => return false,
        }
        true
    }

    #[must_use]
    pub fn description_for_group(&self, group: LocationGroup) -> String {
        self.group(group).description()
    }

    /// Human-readable travel modes, in `TravelMode::ALL` order.
    #[must_use]
    pub fn sorted_travel_mode_descriptions() -> Vec<&'static str> {
        TravelMode::ALL.into_iter().map(travel_mode_label).collect()
    }

    #[must_use]
    pub fn travel_mode_description(&self) -> &'static str {
        travel_mode_label(self.travel_mode)
    }

    /// A map of the start group.
    #[must_use]
    pub fn map_request(&self, view_options: ViewOptions, zoom_level: f32) -> MapRequest {
        MapRequest {
            query_string: self.start.query.clone(),
            center: self.start.location,
            view_options,
            zoom_level,
        }
    }

    /// Street View needs a coordinate for the start group.
    #[must_use]
    pub fn street_view_request(&self) -> Option<StreetViewRequest> {
        self.start.location.map(StreetViewRequest::new)
    }

    #[must_use]
    pub fn directions_request(&self) -> DirectionsRequest {
        DirectionsRequest {
            start: self.start.waypoint(),
            destination: self.destination.waypoint(),
            travel_mode: self.travel_mode,
        }
    }

    fn group(&self, group: LocationGroup) -> &GroupState {
        match group {
            LocationGroup::Start => &self.start,
            LocationGroup::End => &self.destination,
        }
    }

    fn group_mut(&mut self, group: LocationGroup) -> &mut GroupState {
        match group {
            LocationGroup::Start => &mut self.start,
            LocationGroup::End => &mut self.destination,
        }
    }
}

const fn travel_mode_label(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving => "Driving",
        TravelMode::Transit => "Public transit",
        TravelMode::Biking => "Bicycling",
        TravelMode::Walking => "Walking",
    }
}

#[cfg(test)]
#[path = "request_model_test.rs"]
mod tests;
