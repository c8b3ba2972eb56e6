use super::JourneysAppError;
use crate::{
    normalize::{DecodeErrorPolicy, ExpectedPeriod, JourneyNormalizer, PropertyLayout},
    output,
};
use std::path::Path;

/// resolved arguments of a postprocess run
#[derive(Debug, Clone)]
pub struct PostprocessArguments {
    pub input: String,
    pub geojson_output: Option<String>,
    pub csv_output: Option<String>,
    pub period: Option<ExpectedPeriod>,
    pub decode_error_policy: DecodeErrorPolicy,
    pub property_layout: PropertyLayout,
    pub collection_name: String,
    pub overwrite: bool,
}

/// reads a batch of directions responses, normalizes it and writes the
/// requested GeoJSON and/or CSV outputs.
pub fn run_postprocess(args: &PostprocessArguments) -> Result<(), JourneysAppError> {
    if args.geojson_output.is_none() && args.csv_output.is_none() {
        return Err(JourneysAppError::InvalidArguments(String::from(
            "at least one of --geojson-output or --csv-output is required",
        )));
    }
    let period = resolve_period(args);
    match period {
        Some(p) => log::info!("checking departures against expected period {p}"),
        None => log::info!("no expected period for {}, skipping departure check", args.input),
    }

    let results = output::read_directions_file(Path::new(&args.input))?;
    let normalizer = JourneyNormalizer::new(args.decode_error_policy, args.property_layout);
    let batch = normalizer.normalize_batch(&results, period)?;
    let n_routed = batch.records.iter().filter(|r| r.is_routed()).count();
    log::info!(
        "normalized {} results, {} routed and {} unrouted",
        batch.len(),
        n_routed,
        batch.len() - n_routed
    );

    if let Some(f) = &args.geojson_output {
        output::write_geojson(
            &batch.features,
            &args.collection_name,
            Path::new(f),
            args.overwrite,
        )?;
    }
    if let Some(f) = &args.csv_output {
        output::write_csv(&batch.records, Path::new(f), args.overwrite)?;
    }
    Ok(())
}

/// an explicit period wins; otherwise the GeoJSON output, CSV output and
/// input file names are tried in that order.
pub fn resolve_period(args: &PostprocessArguments) -> Option<ExpectedPeriod> {
    args.period.or_else(|| {
        [
            args.geojson_output.as_deref(),
            args.csv_output.as_deref(),
            Some(args.input.as_str()),
        ]
        .into_iter()
        .flatten()
        .find_map(ExpectedPeriod::from_label)
    })
}
