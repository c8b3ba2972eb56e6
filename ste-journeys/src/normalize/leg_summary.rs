use super::units::{meters_to_miles, seconds_to_minutes};
use crate::directions::Leg;
use geo::Coord;

/// origin/destination and totals for the leg of a routed trip
#[derive(Debug, Clone, PartialEq)]
pub struct LegSummary {
    pub origin: String,
    pub dest: String,
    /// x = longitude, y = latitude
    pub origin_location: Coord<f64>,
    pub dest_location: Coord<f64>,
    /// absent for walking-only trips
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub total_minutes: f64,
    pub total_miles: f64,
}

pub fn extract_leg_summary(leg: &Leg) -> LegSummary {
    LegSummary {
        origin: leg.start_address.clone(),
        dest: leg.end_address.clone(),
        origin_location: leg.start_location,
        dest_location: leg.end_location,
        departure_time: leg.departure_time.clone(),
        arrival_time: leg.arrival_time.clone(),
        total_minutes: seconds_to_minutes(leg.duration_seconds),
        total_miles: meters_to_miles(leg.distance_meters),
    }
}
