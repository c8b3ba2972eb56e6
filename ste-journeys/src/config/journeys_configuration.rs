use crate::normalize::PropertyLayout;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// environment variables with this prefix override file values, using `__`
/// between sections, e.g. `STE_JOURNEYS__AUTH__GKEY`
pub const ENV_PREFIX: &str = "STE_JOURNEYS";

/// run configuration for ste-journeys. every value has a default, so an
/// absent configuration file is valid.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct JourneysConfiguration {
    pub auth: AuthConfiguration,
    pub directions: DirectionsSettings,
    pub output: OutputSettings,
}

/// matches the `[auth]` section of the legacy `config.ini`
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AuthConfiguration {
    /// Google Maps Platform API key
    pub gkey: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct DirectionsSettings {
    pub base_url: String,
    pub mode: String,
    pub units: String,
    /// pause after every request
    pub request_delay_ms: u64,
    /// pause before retrying a failed request
    pub retry_delay_ms: u64,
    pub max_attempts: u32,
}

impl Default for DirectionsSettings {
    fn default() -> Self {
        Self {
            base_url: String::from("https://maps.googleapis.com/maps/api/directions/json"),
            mode: String::from("transit"),
            units: String::from("imperial"),
            request_delay_ms: 100,
            retry_delay_ms: 1000,
            max_attempts: 3,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    /// `name` member of the written FeatureCollection
    pub collection_name: String,
    pub property_layout: PropertyLayout,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            collection_name: String::from("trips"),
            property_layout: PropertyLayout::default(),
        }
    }
}

impl JourneysConfiguration {
    /// loads the configuration from an optional `.toml`, `.json` or `.ini`
    /// file, then applies `STE_JOURNEYS__*` environment overrides.
    pub fn load(configuration_file: Option<&str>) -> Result<JourneysConfiguration, ConfigError> {
        let mut builder = Config::builder();
        if let Some(f) = configuration_file {
            log::info!("reading ste-journeys configuration from {f}");
            builder = builder.add_source(File::new(f, file_format(f)?));
        }
        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

fn file_format(f: &str) -> Result<FileFormat, ConfigError> {
    if f.ends_with(".toml") {
        Ok(FileFormat::Toml)
    } else if f.ends_with(".json") {
        Ok(FileFormat::Json)
    } else if f.ends_with(".ini") {
        Ok(FileFormat::Ini)
    } else {
        Err(ConfigError::Message(format!("unsupported file type: {f}")))
    }
}
