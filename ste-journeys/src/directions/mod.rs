//! typed model of Google Directions API responses. raw responses are
//! deserialized into the wire structs in [`response`] and validated once
//! into a [`DirectionsResult`]; everything downstream works on the typed model.
mod directions_error;
mod directions_result;
mod leg;
pub mod response;
mod step;

pub use directions_error::DirectionsError;
pub use directions_result::{DirectionsResult, RoutedResult, UnroutedResult};
pub use leg::Leg;
pub use step::{Step, TransitRide};
