//! the journey normalizer: turns validated directions results into GeoJSON
//! line features and flat itinerary records, one of each per input result.
mod decode_error_policy;
mod departure_period_check;
mod expected_period;
pub mod feature_ops;
mod itinerary_record;
mod leg_summary;
mod normalize_error;
mod normalize_ops;
mod property_layout;
mod step_aggregates;
mod trip_geometry;
pub mod units;

pub use decode_error_policy::DecodeErrorPolicy;
pub use departure_period_check::{
    apply_am_pm_heuristic, apply_period_check, DeparturePeriodCheck, SubstringPeriodCheck,
    PM_DEPARTURE_NOTE,
};
pub use expected_period::ExpectedPeriod;
pub use itinerary_record::{Itinerary, ItineraryRecord};
pub use leg_summary::{extract_leg_summary, LegSummary};
pub use normalize_error::NormalizeError;
pub use normalize_ops::{build_record, normalize_batch, JourneyNormalizer, NormalizedBatch};
pub use property_layout::PropertyLayout;
pub use step_aggregates::{extract_step_aggregates, StepAggregates};
pub use trip_geometry::{decode_overview_geometry, TripGeometry};
