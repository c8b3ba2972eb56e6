use super::{
    response::{StepResponse, TravelMode},
    DirectionsError,
};

/// one step of a leg, validated so that transit steps always carry their ride.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Walking {
        duration_seconds: f64,
        distance_meters: f64,
    },
    Transit {
        duration_seconds: f64,
        distance_meters: f64,
        ride: TransitRide,
    },
    /// any other travel mode; contributes to neither walking nor transit totals
    Other {
        duration_seconds: f64,
        distance_meters: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitRide {
    pub departure_stop: String,
    pub arrival_stop: String,
    /// line short name, or the full line name when no short name is published
    pub line: String,
}

impl Step {
    pub fn try_from_response(step: StepResponse, step_index: usize) -> Result<Step, DirectionsError> {
        let duration_seconds = step.duration.value;
        let distance_meters = step.distance.value;
        match step.travel_mode {
            TravelMode::Walking => Ok(Step::Walking {
                duration_seconds,
                distance_meters,
            }),
            TravelMode::Transit => {
                let details = step
                    .transit_details
                    .ok_or(DirectionsError::MissingTransitDetails { step_index })?;
                let line = details
                    .line
                    .short_name
                    .or(details.line.name)
                    .ok_or(DirectionsError::MissingLineName { step_index })?;
                Ok(Step::Transit {
                    duration_seconds,
                    distance_meters,
                    ride: TransitRide {
                        departure_stop: details.departure_stop.name,
                        arrival_stop: details.arrival_stop.name,
                        line,
                    },
                })
            }
            TravelMode::Driving | TravelMode::Bicycling | TravelMode::Other => Ok(Step::Other {
                duration_seconds,
                distance_meters,
            }),
        }
    }
}
