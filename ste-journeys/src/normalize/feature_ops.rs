use super::{Itinerary, ItineraryRecord, PropertyLayout, TripGeometry};
use geojson::{Feature, JsonObject};
use serde_json::json;

/// builds the GeoJSON feature for a record. routed records carry every
/// itinerary attribute, unrouted records carry only `notes`, `origin` and `dest`.
pub fn to_feature(
    geometry: &TripGeometry,
    record: &ItineraryRecord,
    layout: PropertyLayout,
) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry.to_geojson()),
        id: None,
        properties: Some(feature_properties(record, layout)),
        foreign_members: None,
    }
}

pub fn feature_properties(record: &ItineraryRecord, layout: PropertyLayout) -> JsonObject {
    let mut properties = JsonObject::new();
    match &record.itinerary {
        Itinerary::Routed { leg, steps } => {
            properties.insert(String::from("origin"), json!(leg.origin));
            properties.insert(String::from("dest"), json!(leg.dest));
            if layout == PropertyLayout::WithCoordinates {
                properties.insert(String::from("origin_lat"), json!(leg.origin_location.y));
                properties.insert(String::from("origin_lon"), json!(leg.origin_location.x));
                properties.insert(String::from("dest_lat"), json!(leg.dest_location.y));
                properties.insert(String::from("dest_lon"), json!(leg.dest_location.x));
            }
            properties.insert(String::from("departure_time"), json!(leg.departure_time));
            properties.insert(String::from("arrival_time"), json!(leg.arrival_time));
            properties.insert(String::from("total_minutes"), json!(leg.total_minutes));
            properties.insert(String::from("total_miles"), json!(leg.total_miles));
            properties.insert(
                String::from("walk_time_minutes"),
                json!(steps.walk_time_minutes),
            );
            properties.insert(String::from("walk_dist_miles"), json!(steps.walk_dist_miles));
            properties.insert(
                String::from("transit_time_minutes"),
                json!(steps.transit_time_minutes),
            );
            properties.insert(String::from("num_transfers"), json!(steps.num_transfers));
            properties.insert(String::from("starting_stop"), json!(steps.starting_stop));
            properties.insert(String::from("end_stop"), json!(steps.end_stop));
            properties.insert(String::from("routes_taken"), json!(steps.routes_taken));
        }
        Itinerary::Unrouted { origin, dest } => {
            properties.insert(String::from("origin"), json!(origin));
            properties.insert(String::from("dest"), json!(dest));
        }
    }
    properties.insert(String::from("notes"), json!(record.notes));
    properties
}
