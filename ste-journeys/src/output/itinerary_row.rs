use crate::normalize::{Itinerary, ItineraryRecord};
use itertools::Itertools;
use serde::Serialize;

/// flat, tabular form of an [`ItineraryRecord`]. fields an unrouted record
/// does not have are left empty, and `routes_taken` is comma-joined.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct ItineraryRow {
    pub origin: Option<String>,
    pub dest: Option<String>,
    pub origin_lat: Option<f64>,
    pub origin_lon: Option<f64>,
    pub dest_lat: Option<f64>,
    pub dest_lon: Option<f64>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub total_minutes: Option<f64>,
    pub total_miles: Option<f64>,
    pub walk_time_minutes: Option<f64>,
    pub walk_dist_miles: Option<f64>,
    pub transit_time_minutes: Option<f64>,
    pub num_transfers: Option<usize>,
    pub starting_stop: Option<String>,
    pub end_stop: Option<String>,
    pub routes_taken: Option<String>,
    pub notes: String,
}

impl From<&ItineraryRecord> for ItineraryRow {
    fn from(record: &ItineraryRecord) -> Self {
        match &record.itinerary {
            Itinerary::Routed { leg, steps } => ItineraryRow {
                origin: Some(leg.origin.clone()),
                dest: Some(leg.dest.clone()),
                origin_lat: Some(leg.origin_location.y),
                origin_lon: Some(leg.origin_location.x),
                dest_lat: Some(leg.dest_location.y),
                dest_lon: Some(leg.dest_location.x),
                departure_time: leg.departure_time.clone(),
                arrival_time: leg.arrival_time.clone(),
                total_minutes: Some(leg.total_minutes),
                total_miles: Some(leg.total_miles),
                walk_time_minutes: Some(steps.walk_time_minutes),
                walk_dist_miles: Some(steps.walk_dist_miles),
                transit_time_minutes: Some(steps.transit_time_minutes),
                num_transfers: Some(steps.num_transfers),
                starting_stop: steps.starting_stop.clone(),
                end_stop: steps.end_stop.clone(),
                routes_taken: Some(steps.routes_taken.iter().join(",")),
                notes: record.notes.clone(),
            },
            Itinerary::Unrouted { origin, dest } => ItineraryRow {
                origin: origin.clone(),
                dest: dest.clone(),
                notes: record.notes.clone(),
                ..Default::default()
            },
        }
    }
}
