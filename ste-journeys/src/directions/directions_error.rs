#[derive(thiserror::Error, Debug)]
pub enum DirectionsError {
    #[error("failure decoding directions response: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("routed response has no legs in its first route")]
    MissingLeg,
    #[error("TRANSIT step {step_index} is missing transit_details")]
    MissingTransitDetails { step_index: usize },
    #[error("TRANSIT step {step_index} has neither a line short_name nor name")]
    MissingLineName { step_index: usize },
    #[error("unrouted response with status {status} has {found} geocoded waypoints, expected 2")]
    MissingWaypoints { status: String, found: usize },
}
