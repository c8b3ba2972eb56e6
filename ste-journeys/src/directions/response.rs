//! wire format of a single Directions API response, as written to the
//! batch file by the query step. only the fields the normalizer reads
//! are modeled; unknown fields are ignored.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<RouteResponse>,
    #[serde(default)]
    pub geocoded_waypoints: Vec<GeocodedWaypoint>,
}

/// the query step writes the requested origin/destination into `address`
/// when the API could not route a pair.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GeocodedWaypoint {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub geocoder_status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RouteResponse {
    #[serde(default)]
    pub legs: Vec<LegResponse>,
    pub overview_polyline: OverviewPolyline,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OverviewPolyline {
    pub points: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LegResponse {
    pub start_address: String,
    pub end_address: String,
    pub start_location: LatLng,
    pub end_location: LatLng,
    #[serde(default)]
    pub departure_time: Option<TimeText>,
    #[serde(default)]
    pub arrival_time: Option<TimeText>,
    pub duration: TextValue,
    pub distance: TextValue,
    #[serde(default)]
    pub steps: Vec<StepResponse>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// a `{text, value}` pair, value in seconds or meters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextValue {
    #[serde(default)]
    pub text: Option<String>,
    pub value: f64,
}

/// walking-only legs omit these entirely, and the text may be absent as well
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimeText {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub value: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StepResponse {
    pub travel_mode: TravelMode,
    pub duration: TextValue,
    pub distance: TextValue,
    #[serde(default)]
    pub transit_details: Option<TransitDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Walking,
    Transit,
    Driving,
    Bicycling,
    #[serde(other)]
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransitDetails {
    pub departure_stop: TransitStop,
    pub arrival_stop: TransitStop,
    pub line: TransitLine,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransitStop {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransitLine {
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
