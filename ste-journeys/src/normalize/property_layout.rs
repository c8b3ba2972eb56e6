use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// which attribute set a routed feature carries in its GeoJSON properties
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyLayout {
    /// itinerary attributes only; coordinates live in the geometry
    Legacy,
    /// itinerary attributes plus origin/destination lat/lon
    #[default]
    WithCoordinates,
}
