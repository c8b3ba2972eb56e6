mod journeys_configuration;

pub use journeys_configuration::{
    AuthConfiguration, DirectionsSettings, JourneysConfiguration, OutputSettings, ENV_PREFIX,
};
