use super::{response::LegResponse, DirectionsError, Step};
use geo::Coord;

/// a validated leg. coordinates use x = longitude, y = latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub start_address: String,
    pub end_address: String,
    pub start_location: Coord<f64>,
    pub end_location: Coord<f64>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub duration_seconds: f64,
    pub distance_meters: f64,
    pub steps: Vec<Step>,
}

impl TryFrom<LegResponse> for Leg {
    type Error = DirectionsError;

    fn try_from(leg: LegResponse) -> Result<Self, Self::Error> {
        let steps = leg
            .steps
            .into_iter()
            .enumerate()
            .map(|(idx, step)| Step::try_from_response(step, idx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Leg {
            start_address: leg.start_address,
            end_address: leg.end_address,
            start_location: Coord {
                x: leg.start_location.lng,
                y: leg.start_location.lat,
            },
            end_location: Coord {
                x: leg.end_location.lng,
                y: leg.end_location.lat,
            },
            departure_time: leg.departure_time.and_then(|t| t.text),
            arrival_time: leg.arrival_time.and_then(|t| t.text),
            duration_seconds: leg.duration.value,
            distance_meters: leg.distance.value,
            steps,
        })
    }
}
