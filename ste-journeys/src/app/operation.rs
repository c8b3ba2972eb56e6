use super::{run_postprocess, JourneysAppError, PostprocessArguments};
use crate::{
    config::JourneysConfiguration,
    normalize::{DecodeErrorPolicy, ExpectedPeriod, PropertyLayout},
    output,
    query::{self, DirectionsClient, QueryError},
};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum JourneysOperation {
    /// convert a file of Directions API responses into GeoJSON trip lines and a CSV of itineraries
    Postprocess {
        /// JSON array of Directions API responses, one per OD pair
        #[arg(long)]
        input: String,
        /// GeoJSON FeatureCollection output path
        #[arg(long)]
        geojson_output: Option<String>,
        /// CSV itinerary output path
        #[arg(long)]
        csv_output: Option<String>,
        /// period the batch was queried for. when omitted, it is read from the
        /// output or input file name (e.g. am_journeys.json)
        #[arg(long, value_enum)]
        period: Option<ExpectedPeriod>,
        #[arg(long, value_enum, default_value_t = DecodeErrorPolicy::Fail)]
        decode_error_policy: DecodeErrorPolicy,
        /// overrides output.property_layout from the configuration
        #[arg(long, value_enum)]
        property_layout: Option<PropertyLayout>,
        /// .toml, .json or .ini file with ste-journeys settings
        #[arg(long)]
        configuration_file: Option<String>,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// query the Directions API for every OD pair in a CSV file
    Query {
        /// CSV of OD records with home_address, school_lat, school_lon and timestamps
        #[arg(long)]
        od_file: String,
        #[arg(long, value_enum)]
        period: ExpectedPeriod,
        /// JSON output path, one response per OD record. if a record cannot be
        /// queried, the responses collected before it are still written here
        #[arg(long)]
        output: String,
        /// only query the first n OD records
        #[arg(long)]
        limit: Option<usize>,
        /// .toml, .json or .ini file with ste-journeys settings
        #[arg(long)]
        configuration_file: Option<String>,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
}

impl JourneysOperation {
    pub fn run(&self) -> Result<(), JourneysAppError> {
        match self {
            JourneysOperation::Postprocess {
                input,
                geojson_output,
                csv_output,
                period,
                decode_error_policy,
                property_layout,
                configuration_file,
                overwrite,
            } => {
                let conf = JourneysConfiguration::load(configuration_file.as_deref())?;
                let args = PostprocessArguments {
                    input: input.clone(),
                    geojson_output: geojson_output.clone(),
                    csv_output: csv_output.clone(),
                    period: *period,
                    decode_error_policy: *decode_error_policy,
                    property_layout: property_layout.unwrap_or(conf.output.property_layout),
                    collection_name: conf.output.collection_name.clone(),
                    overwrite: *overwrite,
                };
                run_postprocess(&args)
            }
            JourneysOperation::Query {
                od_file,
                period,
                output,
                limit,
                configuration_file,
                overwrite,
            } => {
                let conf = JourneysConfiguration::load(configuration_file.as_deref())?;
                let api_key = conf.auth.gkey.clone().ok_or(QueryError::MissingApiKey)?;
                let mut records = query::read_od_records(Path::new(od_file))?;
                if let Some(n) = limit {
                    records.truncate(*n);
                }
                log::info!("querying {period} directions for {} OD records", records.len());
                let client = DirectionsClient::new(&conf.directions, api_key)?;
                let result = query::query_batch(&client, &records, *period, &conf.directions);
                write_query_responses(result, Path::new(output), *overwrite)
            }
        }
    }
}

/// writes the batch responses. an interrupted batch still writes the
/// responses it collected before the failing record, then returns its error.
fn write_query_responses(
    result: Result<Vec<Value>, QueryError>,
    output: &Path,
    overwrite: bool,
) -> Result<(), JourneysAppError> {
    match result {
        Ok(responses) => {
            output::write_json_array(&responses, output, overwrite)?;
            Ok(())
        }
        Err(QueryError::BatchInterrupted {
            index,
            completed,
            source,
        }) => {
            log::error!(
                "query stopped at OD record {index}, writing the {} responses collected so far",
                completed.len()
            );
            output::write_json_array(&completed, output, overwrite)?;
            Err(QueryError::BatchInterrupted {
                index,
                completed,
                source,
            }
            .into())
        }
        Err(e) => Err(e.into()),
    }
}
